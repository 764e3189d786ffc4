//! Integration tests for Barback

mod engine_properties;
mod scenarios;

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const CATALOG: &str = r#"{
        "ingredients": [
            {"id": 1, "name": "Vodka", "inStock": true},
            {"id": 2, "name": "Smirnoff", "baseIngredientId": 1},
            {"id": 3, "name": "Orange Juice", "inStock": true},
            {"id": 4, "name": "Lime"},
            {"id": 5, "name": "Ginger Beer"}
        ],
        "cocktails": [
            {"id": 10, "name": "Screwdriver", "ingredients": [
                {"ingredientId": 2, "allowBaseSubstitution": true},
                {"ingredientId": 3}
            ]},
            {"id": 11, "name": "Moscow Mule", "ingredients": [
                {"ingredientId": 1},
                {"ingredientId": 5},
                {"ingredientId": 4, "garnish": true}
            ]}
        ]
    }"#;

    struct Bar {
        dir: TempDir,
    }

    impl Bar {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            std::fs::write(dir.path().join("catalog.json"), CATALOG).unwrap();
            Self { dir }
        }

        fn empty() -> Self {
            Self {
                dir: TempDir::new().unwrap(),
            }
        }

        fn catalog(&self) -> PathBuf {
            self.dir.path().join("catalog.json")
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn cmd(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("barback");
            cmd.env_remove("BARBACK_CONFIG")
                .env_remove("BARBACK_CATALOG")
                .env("NO_COLOR", "1")
                .arg("--config")
                .arg(self.path("config.toml"))
                .arg("--catalog")
                .arg(self.catalog());
            cmd
        }
    }

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("barback")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Track which drinks you can make"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("barback")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("barback"));
    }

    #[test]
    fn available_lists_makeable() {
        Bar::new()
            .cmd()
            .args(["available", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Screwdriver"))
            .stdout(predicate::str::contains("Moscow Mule").not());
    }

    #[test]
    fn available_json() {
        let output = Bar::new()
            .cmd()
            .args(["available", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let names: Vec<_> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Screwdriver"]);
    }

    #[test]
    fn missing_catalog_fails() {
        Bar::empty()
            .cmd()
            .arg("available")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Catalog not found"))
            .stderr(predicate::str::contains("barback import"));
    }

    #[test]
    fn ingredients_json_counts() {
        let output = Bar::new()
            .cmd()
            .args(["ingredients", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let smirnoff = &rows[1];
        assert_eq!(smirnoff["name"], "Smirnoff");
        assert_eq!(smirnoff["count"], 1);
        assert_eq!(smirnoff["singleName"], "Screwdriver");

        let vodka = &rows[0];
        assert_eq!(vodka["count"], 1);
        assert_eq!(vodka["singleName"], "Screwdriver");

        let lime = &rows[3];
        assert_eq!(lime["count"], 0);
        assert!(lime["singleName"].is_null());
    }

    #[test]
    fn explain_shows_substitution() {
        Bar::new()
            .cmd()
            .args(["explain", "screwdriver"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Vodka via base"))
            .stdout(predicate::str::contains("Makeable"));
    }

    #[test]
    fn explain_unknown_cocktail() {
        Bar::new()
            .cmd()
            .args(["explain", "Zombie"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cocktail not found"));
    }

    #[test]
    fn stock_toggle_updates_catalog() {
        let bar = Bar::new();

        bar.cmd()
            .args(["stock", "Ginger Beer"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Ginger Beer is now in stock"));

        // The lime garnish still blocks the mule unless garnish is ignored.
        bar.cmd()
            .args(["available", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Moscow Mule").not());

        bar.cmd()
            .args(["available", "--format", "plain", "--ignore-garnish"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Moscow Mule"));

        let saved: serde_json::Value = serde_json::from_str(&read(&bar.catalog())).unwrap();
        assert_eq!(saved["ingredients"][4]["name"], "Ginger Beer");
        assert_eq!(saved["ingredients"][4]["inStock"], true);
    }

    #[test]
    fn stock_reports_newly_makeable() {
        let bar = Bar::new();
        bar.cmd().args(["stock", "5"]).assert().success();

        bar.cmd()
            .args(["stock", "Lime"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Moscow Mule (now makeable)"));
    }

    #[test]
    fn stock_off_reports_lost_cocktail() {
        Bar::new()
            .cmd()
            .args(["stock", "Vodka", "--off"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Screwdriver - no longer makeable"));
    }

    #[test]
    fn stock_noop() {
        Bar::new()
            .cmd()
            .args(["stock", "vodka"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already in stock"));
    }

    #[test]
    fn stock_unknown_ingredient() {
        Bar::new()
            .cmd()
            .args(["stock", "Mezcal"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Ingredient not found"));
    }

    #[test]
    fn import_replaces_catalog() {
        let bar = Bar::empty();
        let source = bar.path("seed.json");
        std::fs::write(&source, CATALOG).unwrap();

        bar.cmd()
            .arg("import")
            .arg(&source)
            .assert()
            .success()
            .stdout(predicate::str::contains("Imported 5 ingredients and 2 cocktails"));

        assert!(read(&bar.catalog()).contains("\"searchName\": \"orange juice\""));
    }

    #[test]
    fn import_tolerates_bad_shapes() {
        let bar = Bar::empty();
        let source = bar.path("seed.json");
        std::fs::write(&source, r#"{"ingredients": "nope", "cocktails": []}"#).unwrap();

        bar.cmd()
            .arg("import")
            .arg(&source)
            .assert()
            .success()
            .stdout(predicate::str::contains("no ingredients"));

        bar.cmd()
            .arg("available")
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing makeable"));
    }

    #[test]
    fn fingerprint_ignores_shopping_list() {
        let bar = Bar::new();
        let first = bar.cmd().arg("fingerprint").output().unwrap();
        assert!(first.status.success());

        let edited = CATALOG.replace(
            r#"{"id": 4, "name": "Lime"}"#,
            r#"{"id": 4, "name": "Lime", "inShoppingList": true, "description": "fresh"}"#,
        );
        std::fs::write(bar.catalog(), edited).unwrap();
        let second = bar.cmd().arg("fingerprint").output().unwrap();
        assert_eq!(first.stdout, second.stdout);

        bar.cmd().args(["stock", "Lime"]).assert().success();
        let third = bar.cmd().arg("fingerprint").output().unwrap();
        assert_ne!(first.stdout, third.stdout);
    }

    #[test]
    fn config_show() {
        Bar::empty()
            .cmd()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[policy]"));
    }

    #[test]
    fn config_set_policy() {
        let bar = Bar::new();
        bar.cmd()
            .args(["config", "set", "policy.allow_substitutes", "true"])
            .assert()
            .success();

        assert!(read(&bar.path("config.toml")).contains("allow_substitutes = true"));

        bar.cmd()
            .args(["config", "set", "bar.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }

    #[test]
    fn config_path() {
        let bar = Bar::empty();
        bar.cmd()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }
}
