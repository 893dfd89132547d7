//! Design System Integration Tests
//!
//! End-to-end tests from config file to resolved property bags, plus the
//! screens' use of service errors inside styled components.

use design_system::colors::{error, primary};
use design_system::components::{Alert, AlertKind, Button, ButtonSize, ButtonVariant, Input};
use design_system::tokens::{borders, spacing};
use design_system::{
    Catalog, ComponentKind, ConfigError, DesignSystem, DesignSystemConfig, GlassLevel, Modifier,
    ModifierCategory,
};
use services::auth::{AuthError, SignUpRequest};
use services::storage::{file_extension, mime_type_for, user_storage_path, StorageFolder};
use std::io::Write;
use std::sync::Arc;
use tempfile::{NamedTempFile, TempDir};

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

/// Test the two documented resolution scenarios through the public API
#[test]
fn test_documented_scenarios() {
    let system = DesignSystem::new().unwrap();

    let button = system
        .resolve(
            ComponentKind::Button,
            &[Modifier::variant("primary"), Modifier::size("lg")],
        )
        .unwrap();
    let props = button.to_properties();
    assert_eq!(props["backgroundColor"], primary::GLASS);
    assert_eq!(props["borderColor"], primary::BORDER);
    assert_eq!(props["paddingVertical"], spacing::MD as f64);
    assert_eq!(props["paddingHorizontal"], spacing::LG as f64);
    assert_eq!(props["borderRadius"], borders::radius::LG as f64);

    let alert = system
        .resolve_named("alert", &[("variant", "error")])
        .unwrap();
    assert_eq!(alert.border.border_left_width, Some(borders::width::THICK));
    assert_eq!(alert.color.background_color.as_deref(), Some(error::GLASS));
}

/// Test base-only, precedence and unknown-modifier properties for every kind
#[test]
fn test_fold_properties_hold_for_every_kind() {
    let system = DesignSystem::new().unwrap();
    let registry = system.registry();

    for kind in ComponentKind::ALL {
        let base = registry.base(kind).unwrap();
        assert_eq!(&system.resolve(kind, &[]).unwrap(), base, "{}", kind);

        let unknown = system
            .resolve(kind, &[Modifier::variant("doesNotExist")])
            .unwrap();
        assert_eq!(&unknown, base, "{}", kind);

        let descriptor = registry.descriptor(kind).unwrap();
        for category in ModifierCategory::ALL {
            for name in descriptor.names(category) {
                let resolved = system.resolve(kind, &[Modifier::new(category, name)]).unwrap();
                let fragment = descriptor.fragment(category, name).unwrap();
                // every key the modifier sets wins over the base
                for (key, value) in fragment.to_properties() {
                    assert_eq!(resolved.to_properties()[&key], value, "{} {} {}", kind, name, key);
                }
            }
        }
    }
}

/// Test loading a config file and building the system from it
#[test]
fn test_config_file_end_to_end() {
    let file = write_config(
        r#"{
            "fontScale": 1.25,
            "fragments": [
                {
                    "kind": "card",
                    "category": "variant",
                    "name": "invoice",
                    "effect": "frosted",
                    "style": { "borderLeftWidth": 4, "borderColor": "rgba(46, 204, 113, 0.4)" }
                },
                {
                    "kind": "button-text",
                    "category": "size",
                    "name": "lg",
                    "style": { "fontSize": 16 }
                }
            ]
        }"#,
    );

    let config = DesignSystemConfig::from_path(file.path()).unwrap();
    let system = DesignSystem::from_config(&config).unwrap();

    let card = system
        .resolve(ComponentKind::Card, &[Modifier::variant("invoice")])
        .unwrap();
    assert_eq!(card.border.border_left_width, Some(4.0));
    assert_eq!(card.border.border_top_width, Some(borders::width::THIN));
    assert_eq!(
        card.color.background_color.as_deref(),
        Some("rgba(255, 255, 255, 0.08)")
    );

    // configured font sizes are scaled along with the stock ones
    let text = system
        .resolve(ComponentKind::ButtonText, &[Modifier::size("lg")])
        .unwrap();
    assert_eq!(text.text.font_size, Some(20.0));
}

/// Test that a bad config fails startup with a typed error
#[test]
fn test_bad_config_fails_startup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("design.json");
    std::fs::write(
        &path,
        r#"{ "fragments": [
            { "kind": "card", "category": "variant", "name": "x", "effect": "glossy" }
        ] }"#,
    )
    .unwrap();

    let config = DesignSystemConfig::from_path(&path).unwrap();
    let err = DesignSystem::from_config(&config).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownEffect(ref name) if name == "glossy"));
}

/// Test the catalog against the registry it was collected from
#[test]
fn test_catalog_matches_registry() {
    let system = DesignSystem::new().unwrap();
    let catalog = Catalog::collect(&system).unwrap();

    assert_eq!(catalog.components.len(), system.registry().len());
    assert_eq!(catalog.effects.len(), GlassLevel::ALL.len());

    let json = serde_json::to_string(&catalog).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["components"].as_array().unwrap().len(), ComponentKind::ALL.len());
}

/// Test concurrent resolution from many threads against one system
#[test]
fn test_concurrent_resolution() {
    let system = Arc::new(DesignSystem::new().unwrap());
    let expected: Vec<_> = ["xs", "sm", "md", "lg", "xl"]
        .iter()
        .map(|size| {
            system
                .resolve(ComponentKind::Button, &[Modifier::variant("info"), Modifier::size(size)])
                .unwrap()
        })
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let system = Arc::clone(&system);
            std::thread::spawn(move || {
                ["xs", "sm", "md", "lg", "xl"]
                    .iter()
                    .map(|size| {
                        system
                            .resolve(
                                ComponentKind::Button,
                                &[Modifier::variant("info"), Modifier::size(size)],
                            )
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

/// Test a register form: validation errors flow into inputs and an alert
#[test]
fn test_register_form_error_flow() {
    let system = DesignSystem::new().unwrap();

    let err = SignUpRequest::new("not-an-email", "secret1", "Ann")
        .validate()
        .unwrap_err();
    let fields = match &err {
        AuthError::Validation(fields) => fields.clone(),
        other => panic!("expected validation error, got {:?}", other),
    };
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].field, "email");

    let email = Input::new()
        .with_label("Email")
        .with_error(fields[0].message)
        .computed_styles(&system)
        .unwrap();
    assert_eq!(email.field.border.border_color.as_deref(), Some(error::MAIN));

    let alert = Alert::new(err.user_message())
        .with_kind(AlertKind::Error)
        .computed_styles(&system)
        .unwrap();
    assert_eq!(alert.icon_name, "close-circle");

    let submit = Button::new("Create account")
        .with_variant(ButtonVariant::Primary)
        .with_size(ButtonSize::Lg)
        .full_width(true)
        .loading(true)
        .computed_styles(&system)
        .unwrap();
    assert!(submit.show_spinner);
    assert_eq!(submit.container.color.opacity, Some(0.6));
}

/// Test storage helpers used when attaching a scanned invoice
#[test]
fn test_invoice_upload_paths() {
    let name = "Scan_0042.PDF";
    assert_eq!(mime_type_for(&file_extension(name)), "application/pdf");
    assert_eq!(
        user_storage_path("user-7", StorageFolder::Invoices),
        "users/user-7/invoices"
    );
}

/// Test the root facade exposes both workspace crates
#[test]
fn test_root_facade_reexports() {
    let system = springbok_erp::design_system::DesignSystem::new().unwrap();
    assert_eq!(system.registry().len(), ComponentKind::ALL.len());
    assert!(springbok_erp::services::auth::is_valid_email("owner@springbok.example"));
}
