use super::*;
use crate::api::LoginResponse;
use crate::profile::UserProfile;
use crate::session::SessionStore;
use crate::storage::MemoryStore;

fn session_as(role: &str) -> Session {
    let mut sessions = SessionStore::new(MemoryStore::new());
    sessions.initialize();
    sessions
        .complete_login(Ok(LoginResponse {
            success: Some(true),
            token: Some("abc".to_owned()),
            user: Some(UserProfile::new(role, Some("org-1".to_owned()))),
            ..LoginResponse::default()
        }))
        .expect("login");
    sessions.session().clone()
}

fn route(path: &str) -> &'static RouteDescriptor {
    route::find(path).expect("route exists")
}

fn redirect_to(to: &'static str) -> Decision {
    Decision::Redirect(Redirect { to, from: None })
}

// =============================================================================
// landing_path
// =============================================================================

#[test]
fn landing_path_maps_each_role_and_defaults_to_login() {
    assert_eq!(landing_path(Some(Role::GlobalAdmin)), "/admin/dashboard");
    assert_eq!(landing_path(Some(Role::SuperAdmin)), "/super-admin/dashboard");
    assert_eq!(landing_path(Some(Role::Hr)), "/hr/dashboard");
    assert_eq!(landing_path(Some(Role::Employee)), "/employee/dashboard");
    assert_eq!(landing_path(None), LOGIN_PATH);
}

// =============================================================================
// decide: loading
// =============================================================================

#[test]
fn loading_session_defers_every_route() {
    let session = Session::loading();
    assert_eq!(decide(&session, route("/login")), Decision::Loading);
    assert_eq!(decide(&session, route("/hr/dashboard")), Decision::Loading);
    assert_eq!(decide_path(&session, "/nowhere"), Decision::Loading);
}

// =============================================================================
// decide: public routes
// =============================================================================

#[test]
fn signed_out_user_sees_login() {
    assert_eq!(decide(&Session::empty(), route("/login")), Decision::Render);
}

#[test]
fn signed_in_user_on_login_goes_to_own_dashboard() {
    for role in Role::ALL {
        let session = session_as(role.as_str());
        assert_eq!(decide(&session, route("/login")), redirect_to(role.dashboard_path()), "{role:?}");
    }
}

#[test]
fn unknown_role_on_login_renders_instead_of_looping() {
    let session = session_as("Contractor");
    assert!(session.is_authenticated());
    assert_eq!(decide(&session, route("/login")), Decision::Render);
}

// =============================================================================
// decide: protected routes
// =============================================================================

#[test]
fn signed_out_user_is_sent_to_login_with_origin() {
    for path in ["/hr/dashboard", "/admin/users", "/dashboard", "/employee/apply-leave"] {
        let decision = decide(&Session::empty(), route(path));
        assert_eq!(
            decision,
            Decision::Redirect(Redirect { to: LOGIN_PATH, from: Some(path.to_owned()) }),
            "{path}"
        );
    }
}

#[test]
fn forbidden_route_redirects_to_same_landing_as_public_guard() {
    let guarded = ["/admin/dashboard", "/super-admin/dashboard", "/hr/dashboard", "/employee/dashboard"];
    for role in Role::ALL {
        let session = session_as(role.as_str());
        let public_redirect = decide(&session, route("/login"));
        for path in guarded {
            let target = route(path);
            if session.can_access_route(target.allowed_roles()) {
                continue;
            }
            assert_eq!(decide(&session, target), public_redirect, "{role:?} -> {path}");
        }
    }
}

#[test]
fn hr_requesting_admin_dashboard_lands_on_hr_dashboard() {
    let session = session_as("HR");
    assert_eq!(session.role(), Some(Role::Hr));
    assert_eq!(decide(&session, route("/admin/dashboard")), redirect_to("/hr/dashboard"));
}

#[test]
fn allowed_route_renders() {
    let session = session_as("HR");
    assert_eq!(decide(&session, route("/hr/payroll")), Decision::Render);
    assert_eq!(decide(&session, route("/dashboard")), Decision::Render);
}

#[test]
fn senior_role_passes_junior_route() {
    let session = session_as("Super_Admin");
    assert_eq!(decide(&session, route("/hr/employees")), Decision::Render);
    assert_eq!(decide(&session, route("/admin/organizations")), redirect_to("/super-admin/dashboard"));
}

#[test]
fn unknown_role_on_protected_route_goes_to_login() {
    let session = session_as("Contractor");
    assert_eq!(decide(&session, route("/employee/dashboard")), redirect_to(LOGIN_PATH));
}

// =============================================================================
// decide_path
// =============================================================================

#[test]
fn unknown_path_signed_out_goes_to_login_via_fallback() {
    let expected = Decision::Redirect(Redirect { to: LOGIN_PATH, from: Some(FALLBACK_PATH.to_owned()) });
    assert_eq!(decide_path(&Session::empty(), "/does-not-exist"), expected);
    assert_eq!(decide_path(&Session::empty(), "/nope"), expected);
}

#[test]
fn unknown_path_signed_in_goes_to_fallback() {
    assert_eq!(decide_path(&session_as("Employee"), "/admin/settings"), redirect_to(FALLBACK_PATH));
}

#[test]
fn unknown_path_with_unknown_role_goes_to_login() {
    assert_eq!(decide_path(&session_as("Contractor"), "/nope"), redirect_to(LOGIN_PATH));
}

#[test]
fn no_session_on_hr_dashboard_redirects_to_login() {
    let mut sessions = SessionStore::new(MemoryStore::new());
    let session = sessions.initialize();
    assert!(!session.is_authenticated());
    assert!(!session.is_loading());
    let Decision::Redirect(redirect) = decide_path(session, "/hr/dashboard") else {
        panic!("expected redirect");
    };
    assert_eq!(redirect.to, "/login");
    assert_eq!(redirect.from.as_deref(), Some("/hr/dashboard"));
}

// =============================================================================
// Redirect::href
// =============================================================================

#[test]
fn href_without_origin_is_plain_path() {
    assert_eq!(Redirect { to: "/hr/dashboard", from: None }.href(), "/hr/dashboard");
}

#[test]
fn href_encodes_origin_as_next_param() {
    let redirect = Redirect { to: LOGIN_PATH, from: Some("/hr/leave-requests".to_owned()) };
    assert_eq!(redirect.href(), "/login?next=%2Fhr%2Fleave-requests");
}

// =============================================================================
// post_login_target
// =============================================================================

#[test]
fn post_login_resumes_remembered_route_when_allowed() {
    let session = session_as("HR");
    assert_eq!(post_login_target(&session, Some("/hr/payroll")), "/hr/payroll");
}

#[test]
fn post_login_ignores_forbidden_or_unknown_next() {
    let session = session_as("Employee");
    assert_eq!(post_login_target(&session, Some("/hr/payroll")), "/employee/dashboard");
    assert_eq!(post_login_target(&session, Some("https://evil.example")), "/employee/dashboard");
    assert_eq!(post_login_target(&session, Some("/login")), "/employee/dashboard");
    assert_eq!(post_login_target(&session, None), "/employee/dashboard");
}

// =============================================================================
// decide_resuming
// =============================================================================

#[test]
fn resuming_on_login_sends_signed_in_user_to_next() {
    let session = session_as("HR");
    assert_eq!(decide_resuming(&session, "/login", Some("/hr/payroll")), redirect_to("/hr/payroll"));
}

#[test]
fn resuming_falls_back_to_landing_for_forbidden_next() {
    let session = session_as("HR");
    assert_eq!(decide_resuming(&session, "/login", Some("/admin/users")), redirect_to("/hr/dashboard"));
    assert_eq!(decide_resuming(&session, "/login", None), decide(&session, route("/login")));
}

#[test]
fn resuming_leaves_protected_decisions_alone() {
    let session = session_as("Employee");
    assert_eq!(
        decide_resuming(&session, "/hr/payroll", Some("/employee/profile")),
        redirect_to("/employee/dashboard")
    );
    assert_eq!(
        decide_resuming(&Session::empty(), "/login", Some("/hr/payroll")),
        Decision::Render
    );
}
