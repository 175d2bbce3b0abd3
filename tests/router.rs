//! Integration tests for command routing.

use clirouter::args::{TokenRole, TokenStore};
use clirouter::command::{Command, CommandRegistry, CommandSpec};
use clirouter::router::{RouteError, Router, RouterConfig};

fn registry() -> CommandRegistry {
    CommandRegistry::new(
        vec![
            CommandSpec::new("alpha"),
            CommandSpec::new("beta").with_shortcut("-b"),
            CommandSpec::new("default"),
        ],
        "default",
    )
    .expect("valid registry")
}

fn route(line: &str, config: RouterConfig) -> (Result<String, RouteError>, TokenStore) {
    let registry = registry();
    let mut store = TokenStore::parse(line);
    let result = registry
        .router(config)
        .route(&mut store)
        .map(|c| c.name.clone());
    (result, store)
}

fn disabled() -> RouterConfig {
    RouterConfig {
        enable_shortcut_routing: false,
    }
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn routes_to_default_without_arguments() {
    let (result, store) = route("tester", RouterConfig::default());
    assert_eq!(result.unwrap(), "default");
    assert!(store.unassigned_tokens().is_empty());
}

#[test]
fn routes_by_name() {
    let (result, store) = route("tester alpha", RouterConfig::default());
    assert_eq!(result.unwrap(), "alpha");
    assert!(store.unassigned_tokens().is_empty());
    assert_eq!(store.first_token_of_role(TokenRole::CommandName), Some("alpha"));
}

#[test]
fn routes_by_shortcut() {
    let (result, store) = route("tester -b", RouterConfig::default());
    assert_eq!(result.unwrap(), "beta");
    assert!(store.unassigned_tokens().is_empty());
    assert_eq!(store.first_token_of_role(TokenRole::CommandName), Some("-b"));
}

#[test]
fn disabled_shortcut_routing_uses_default() {
    let (result, store) = route("tester -b", disabled());
    assert_eq!(result.unwrap(), "default");
    assert_eq!(store.unassigned_tokens(), ["-b"]);
}

#[test]
fn unknown_flag_is_passed_to_default() {
    let (result, store) = route("tester -a", RouterConfig::default());
    assert_eq!(result.unwrap(), "default");
    assert_eq!(store.unassigned_tokens(), ["-a"]);
}

#[test]
fn unknown_name_fails_even_with_default() {
    let (result, store) = route("tester charlie", RouterConfig::default());
    assert_eq!(
        result.unwrap_err(),
        RouteError::RoutingFailed {
            candidate: "charlie".to_string()
        }
    );
    assert_eq!(store.unassigned_tokens(), ["charlie"]);
}

#[test]
fn unknown_name_fails_with_disabled_shortcuts() {
    let (result, _) = route("tester charlie -b", disabled());
    assert!(matches!(result, Err(RouteError::RoutingFailed { candidate }) if candidate == "charlie"));
}

#[test]
fn empty_registry_fails_on_name() {
    let fallback = CommandSpec::new("default");
    let commands: Vec<CommandSpec> = Vec::new();
    let router = Router::new(&commands, &fallback, RouterConfig::default());
    let mut store = TokenStore::from_tokens(["tester", "alpha"]);
    assert!(router.route(&mut store).is_err());
}

// =============================================================================
// LEFTOVER TOKENS
// =============================================================================

#[test]
fn trailing_tokens_stay_unassigned() {
    let (result, store) = route(r#"tester alpha -v --out "my file.txt""#, RouterConfig::default());
    assert_eq!(result.unwrap(), "alpha");
    assert_eq!(store.unassigned_tokens(), ["-v", "--out", "my file.txt"]);
    assert_eq!(store.token_following("--out"), Some("my file.txt"));
}

#[test]
fn only_first_candidate_is_considered() {
    // "alpha" comes after an unknown flag, so the default wins.
    let (result, store) = route("tester -x alpha", RouterConfig::default());
    assert_eq!(result.unwrap(), "default");
    assert_eq!(store.unassigned_tokens(), ["-x", "alpha"]);
}

#[test]
fn repeated_name_classifies_first_occurrence_only() {
    let (result, store) = route("tester alpha alpha", RouterConfig::default());
    assert_eq!(result.unwrap(), "alpha");
    assert_eq!(store.role_of(1), Some(TokenRole::CommandName));
    assert_eq!(store.role_of(2), Some(TokenRole::Unassigned));
}

#[test]
fn pre_classified_tokens_are_skipped() {
    let registry = registry();
    let mut store = TokenStore::from_tokens(["tester", "--verbose", "alpha"]);
    store.classify("--verbose", TokenRole::Option);

    let command = registry
        .router(RouterConfig::default())
        .route(&mut store)
        .unwrap();
    assert_eq!(command.name(), "alpha");
    assert!(store.unassigned_tokens().is_empty());
}

#[test]
fn router_never_assigns_option_and_claims_at_most_one_token() {
    let lines = [
        "tester",
        "tester alpha x y",
        "tester -b -b",
        "tester -z alpha",
        "tester beta -b",
    ];
    for line in lines {
        let (result, store) = route(line, RouterConfig::default());
        assert!(result.is_ok(), "{line} should route");

        let roles: Vec<TokenRole> = store.iter().map(|t| t.role()).collect();
        assert_eq!(roles[0], TokenRole::ProgramName);
        assert!(!roles.contains(&TokenRole::Option));
        assert!(roles.iter().filter(|r| **r == TokenRole::CommandName).count() <= 1);
    }
}

#[test]
fn router_is_reusable_across_stores() {
    let registry = registry();
    let router = registry.router(RouterConfig::default());

    let mut first = TokenStore::parse("tester alpha");
    let mut second = TokenStore::parse("tester -b");
    assert_eq!(router.route(&mut first).unwrap().name, "alpha");
    assert_eq!(router.route(&mut second).unwrap().name, "beta");
}

// =============================================================================
// TRAIT OBJECTS
// =============================================================================

struct Shortcutless(&'static str);

impl Command for Shortcutless {
    fn name(&self) -> &str {
        self.0
    }
}

#[test]
fn routes_boxed_trait_objects() {
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(Shortcutless("init")),
        Box::new(CommandSpec::new("push").with_shortcut("-p")),
    ];
    let router = Router::new(&commands, &commands[0], RouterConfig::default());

    let mut store = TokenStore::parse("tool -p origin");
    let command = router.route(&mut store).unwrap();
    assert_eq!(command.name(), "push");
    assert_eq!(store.unassigned_tokens(), ["origin"]);

    let mut store = TokenStore::parse("tool");
    assert_eq!(router.route(&mut store).unwrap().name(), "init");
}
