//! Integration tests for the RBAC core.
//! Exhaustive over the closed enumerations: totality, navigation partition,
//! post-switch validity, and the reference scenarios.

use netvision_core::pages::{PageGate, PageVariant};
use netvision_core::{
    AccessLevel, Feature, NavigationProjector, PermissionResolver, RoleCatalog, RoleId, ViewId,
    ViewStateController,
};
use std::collections::HashSet;

/// Every (feature, role) pair resolves, both typed and by name.
#[test]
fn test_resolution_is_total() {
    for feature in Feature::ALL {
        for role in RoleId::ALL {
            let typed = PermissionResolver::resolve(feature, role);
            let named = PermissionResolver::resolve_named(feature.name(), role.as_str())
                .expect("known pair must resolve");
            assert_eq!(typed, named, "{feature} / {role}");
        }
    }
}

/// visible ∪ hidden == catalog, visible ∩ hidden == ∅, for every role.
#[test]
fn test_navigation_partition() {
    let catalog: HashSet<ViewId> = NavigationProjector::catalog().iter().map(|i| i.id).collect();

    for role in RoleId::ALL {
        let visible: HashSet<ViewId> =
            NavigationProjector::visible(role).iter().map(|i| i.id).collect();
        let hidden: HashSet<ViewId> =
            NavigationProjector::hidden(role).iter().map(|i| i.id).collect();

        assert!(visible.is_disjoint(&hidden), "{role}: overlap");
        let union: HashSet<ViewId> = visible.union(&hidden).copied().collect();
        assert_eq!(union, catalog, "{role}: union");
    }
}

/// Dashboard and settings are reachable from every role.
#[test]
fn test_universal_sections() {
    for role in RoleId::ALL {
        for view in [ViewId::Dashboard, ViewId::Settings] {
            let mut ctl = ViewStateController::default();
            ctl.select_role(role);
            assert!(ctl.navigate(view).is_applied(), "{role} -> {view}");
            assert_eq!(ctl.view(), view);
        }
    }
}

/// For every (view, old role, new role) triple the controller ends on the
/// same view when the new role may reach it, and on the dashboard otherwise.
#[test]
fn test_post_switch_validity_exhaustive() {
    for from in RoleId::ALL {
        for view in ViewId::ALL {
            if !NavigationProjector::is_reachable(from, view) {
                continue;
            }
            for to in RoleId::ALL {
                let mut ctl = ViewStateController::default();
                ctl.select_role(from);
                assert!(ctl.navigate(view).is_applied());

                ctl.switch_role(to);

                let expected = if NavigationProjector::is_reachable(to, view) {
                    view
                } else {
                    ViewId::Dashboard
                };
                assert_eq!(ctl.role(), Some(to));
                assert_eq!(ctl.view(), expected, "{from} on {view} -> {to}");
                assert!(NavigationProjector::is_reachable(to, ctl.view()));
            }
        }
    }
}

/// Whatever sequence of requests arrives, the current view stays reachable.
#[test]
fn test_view_always_reachable_under_any_request_sequence() {
    let mut ctl = ViewStateController::default();
    for (i, role) in RoleId::ALL.iter().cycle().take(12).enumerate() {
        ctl.switch_role(*role);
        for view in ViewId::ALL.iter().skip(i % ViewId::ALL.len()) {
            ctl.navigate(*view);
            let active = ctl.role().unwrap();
            assert!(NavigationProjector::is_reachable(active, ctl.view()));
        }
    }
}

/// Navigating twice to the same view equals navigating once.
#[test]
fn test_navigate_is_idempotent() {
    for role in RoleId::ALL {
        for view in ViewId::ALL {
            let mut once = ViewStateController::default();
            once.select_role(role);
            once.navigate(view);

            let mut twice = ViewStateController::default();
            twice.select_role(role);
            twice.navigate(view);
            twice.navigate(view);

            assert_eq!(once.state(), twice.state(), "{role} -> {view}");
        }
    }
}

/// Scenario: CIO cannot open devices; the request is a no-op.
#[test]
fn test_cio_navigate_devices_is_noop() {
    let mut ctl = ViewStateController::default();
    ctl.select_role(RoleId::Cio);
    let outcome = ctl.navigate(ViewId::Devices);
    assert!(!outcome.is_applied());
    assert_eq!(ctl.view(), ViewId::Dashboard);
}

/// Scenario: CIO has no security controls; the page renders the placeholder.
#[test]
fn test_cio_security_controls_locked() {
    assert_eq!(
        PermissionResolver::resolve_named("Security Controls", "CIO"),
        Ok(AccessLevel::None)
    );
    let page = PageGate::render(ViewId::Security, RoleId::Cio);
    assert_eq!(page.variant, PageVariant::Locked);
    assert!(page.placeholder.is_some());
}

/// Scenario: Admin on security switches to CIO and lands on the dashboard.
#[test]
fn test_admin_security_switch_to_cio_lands_on_dashboard() {
    let mut ctl = ViewStateController::default();
    ctl.select_role(RoleId::Admin);
    assert!(ctl.navigate(ViewId::Security).is_applied());
    ctl.switch_role(RoleId::Cio);
    assert_eq!(ctl.view(), ViewId::Dashboard);
}

/// Scenario: two roles querying the same feature get their own levels.
#[test]
fn test_query_engine_levels_are_independent() {
    assert_eq!(
        PermissionResolver::resolve_named("Query Engine", "SRE"),
        Ok(AccessLevel::Full)
    );
    assert_eq!(
        PermissionResolver::resolve_named("Query Engine", "CIO"),
        Ok(AccessLevel::Limited)
    );
    // Interleaving does not change either answer.
    for _ in 0..3 {
        assert_eq!(
            PermissionResolver::resolve(Feature::QueryEngine, RoleId::Cio),
            AccessLevel::Limited
        );
        assert_eq!(
            PermissionResolver::resolve(Feature::QueryEngine, RoleId::Sre),
            AccessLevel::Full
        );
    }
}

/// Scenario: sign-out from any state, next selection starts on the dashboard.
#[test]
fn test_sign_out_then_select_starts_fresh() {
    for role in RoleId::ALL {
        for view in ViewId::ALL {
            let mut ctl = ViewStateController::default();
            ctl.select_role(role);
            ctl.navigate(view);
            ctl.sign_out();
            assert!(ctl.is_logged_out());
            assert_eq!(ctl.role(), None);

            ctl.select_role(RoleId::Security);
            assert_eq!(ctl.view(), ViewId::Dashboard);
            assert_eq!(ctl.role(), Some(RoleId::Security));
        }
    }
}

/// The catalog is the only place navigation sets live; the projector agrees.
#[test]
fn test_projector_follows_catalog() {
    for role in RoleCatalog::all() {
        let visible: Vec<ViewId> = NavigationProjector::visible(role.id)
            .iter()
            .map(|i| i.id)
            .collect();
        for view in &visible {
            assert!(role.nav.contains(view));
        }
        assert_eq!(visible.len(), role.nav.len());
    }
}
