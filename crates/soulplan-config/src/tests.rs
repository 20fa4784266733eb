//! Tests for planner, team and soul database configuration.

use super::*;
use soulplan_core::{Attribute, Inventory, Objective, RangeConstraint, Soul};

// ============================================================================
// PlannerConfig
// ============================================================================

#[test]
fn test_toml_parsing() {
    let toml = r#"
        thread_count = "unlimited"
        ignore_crit = true
        soul_db = "souls.yaml"
    "#;

    let config = PlannerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Unlimited);
    assert!(config.ignore_crit);
    assert_eq!(config.soul_db, Some(PathBuf::from("souls.yaml")));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        thread_count:
          specific: 3
    "#;

    let config = PlannerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Specific(3));
    assert!(!config.ignore_crit);
}

#[test]
fn test_unknown_field_rejected() {
    assert!(matches!(
        PlannerConfig::from_toml_str("threads = 4"),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("soulplan.toml");

    assert!(matches!(PlannerConfig::load(&missing), Err(ConfigError::Io(_))));
    assert_eq!(PlannerConfig::load_or_default(&missing).unwrap(), PlannerConfig::default());
}

#[test]
fn test_malformed_file_is_not_defaulted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("soulplan.toml");
    std::fs::write(&path, "ignore_crit = \"yes\"\n").unwrap();

    assert!(matches!(
        PlannerConfig::load_or_default(&path),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("soulplan.toml");
    std::fs::write(&path, "thread_count = { specific = 2 }\n").unwrap();

    let config = PlannerConfig::load(&path).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Specific(2));
}

#[test]
fn test_load_yaml_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("soulplan.yaml");
    std::fs::write(&path, "thread_count: {specific: 2}\nignore_crit: true\n").unwrap();

    let config = PlannerConfig::load(&path).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Specific(2));
    assert!(config.ignore_crit);
}

#[test]
fn test_builder() {
    let config = PlannerConfig::new()
        .with_thread_count(ThreadCount::Specific(8))
        .with_ignore_crit(true)
        .with_soul_db("db.yaml");

    assert_eq!(config.thread_count, ThreadCount::Specific(8));
    assert!(config.ignore_crit);
    assert_eq!(config.soul_db.as_deref(), Some(Path::new("db.yaml")));
}

// ============================================================================
// ThreadCount
// ============================================================================

mod thread_count {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(ThreadCount::default(), ThreadCount::Auto);
    }

    #[test]
    fn test_display() {
        assert_eq!(ThreadCount::Auto.to_string(), "auto");
        assert_eq!(ThreadCount::Unlimited.to_string(), "unlimited");
        assert_eq!(ThreadCount::Specific(4).to_string(), "4");
    }

    #[test]
    fn test_parse() {
        assert_eq!("AUTO".parse::<ThreadCount>().unwrap(), ThreadCount::Auto);
        assert_eq!("unlimited".parse::<ThreadCount>().unwrap(), ThreadCount::Unlimited);
        assert_eq!("6".parse::<ThreadCount>().unwrap(), ThreadCount::Specific(6));
        assert!("many".parse::<ThreadCount>().is_err());
    }

    #[test]
    fn test_resolve() {
        assert_eq!(ThreadCount::Specific(4).resolve(10), 4);
        assert_eq!(ThreadCount::Specific(10).resolve(4), 4);
        assert_eq!(ThreadCount::Specific(3).resolve(0), 1);

        let auto = ThreadCount::Auto.resolve(100);
        assert!(auto >= 1 && auto <= 100);
        assert_eq!(ThreadCount::Auto.resolve(1), 1);
        assert!(ThreadCount::Unlimited.resolve(1) >= 1);
    }

    #[test]
    fn test_file_forms() {
        let yaml = |s: &str| PlannerConfig::from_yaml_str(s).unwrap().thread_count;
        assert_eq!(yaml("thread_count: auto"), ThreadCount::Auto);
        assert_eq!(yaml("thread_count: unlimited"), ThreadCount::Unlimited);
        assert_eq!(yaml("thread_count: 5"), ThreadCount::Specific(5));
        assert_eq!(yaml("thread_count: {specific: 5}"), ThreadCount::Specific(5));

        let toml = |s: &str| PlannerConfig::from_toml_str(s).unwrap().thread_count;
        assert_eq!(toml("thread_count = 5"), ThreadCount::Specific(5));
        assert_eq!(toml("thread_count = \"auto\""), ThreadCount::Auto);

        assert!(PlannerConfig::from_yaml_str("thread_count: many").is_err());
    }

    #[test]
    fn test_serialized_form_reloads() {
        let config = PlannerConfig::new().with_thread_count(ThreadCount::Specific(3));

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("specific: 3"));
        assert_eq!(PlannerConfig::from_yaml_str(&yaml).unwrap(), config);

        let toml = toml::to_string(&config).unwrap();
        assert_eq!(PlannerConfig::from_toml_str(&toml).unwrap(), config);
    }
}

// ============================================================================
// TeamConfig
// ============================================================================

mod team {
    use super::*;

    const TEAM_YAML: &str = r#"
- name: Onikiri
  primary: shadow
  constraints:
    spd: 128-
    crit: 90-100
- name: iba
  primary: [seductress, shadow]
  secondary: odokuro
  objective: damage
  modifiers:
    atk_bonus: 10
- name: momo
  objective: heal
  options:
    crit_buff: true
"#;

    #[test]
    fn test_yaml_list() {
        let team = TeamConfig::from_yaml_str(TEAM_YAML).unwrap();
        assert_eq!(team.len(), 3);
        assert_eq!(team.members[0].primary, NameList::One("shadow".to_string()));
        assert_eq!(
            team.members[1].primary.names(),
            &["seductress".to_string(), "shadow".to_string()]
        );
        assert_eq!(
            team.members[0].constraints.get(Attribute::Speed),
            Some(RangeConstraint::at_least(128))
        );
        assert_eq!(team.members[2].objective, Objective::Heal);
        assert!(team.members[2].options.crit_buff);
        assert!(team.members[2].options.set_effects);
    }

    #[test]
    fn test_misspelled_member_key_is_named() {
        let err = TeamConfig::from_yaml_str("- { name: onikiri, primray: shadow }")
            .unwrap_err()
            .to_string();
        assert!(err.contains("primray"), "{}", err);

        let err = TeamConfig::from_yaml_str("members:\n  - { name: onikiri, speeed: 1 }")
            .unwrap_err()
            .to_string();
        assert!(err.contains("speeed"), "{}", err);

        let err = TeamConfig::from_toml_str("[[members]]\nname = \"onikiri\"\nprimray = \"shadow\"\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("primray"), "{}", err);
    }

    #[test]
    fn test_resolve_members() {
        let members = TeamConfig::from_yaml_str(TEAM_YAML).unwrap().resolve().unwrap();

        assert_eq!(members[0].name, "onikiri");
        assert!(members[0].requirement.is_primary("shadow"));
        assert_eq!(
            members[0].constraints.get(Attribute::Crit),
            Some(RangeConstraint::between(90, 100).unwrap())
        );

        assert_eq!(members[1].name, "ibaraki doji");
        assert_eq!(members[1].requirement.primaries().len(), 2);
        assert!(members[1].requirement.is_secondary("odokuro"));
        assert_eq!(members[1].modifiers.atk_bonus, 10);

        assert_eq!(members[2].name, "momo no sei");
        assert!(members[2].requirement.is_unrestricted());
    }

    #[test]
    fn test_toml_members() {
        let toml = r#"
            [[members]]
            name = "ubume"
            primary = "shadow"
            constraints = { speed = "-150" }

            [[members]]
            name = "kamikui"
            primary = ["harpy"]
            objective = "hp"
        "#;
        let team = TeamConfig::from_toml_str(toml).unwrap();
        let members = team.resolve().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(
            members[0].constraints.get(Attribute::Speed),
            Some(RangeConstraint::at_most(150))
        );
        assert_eq!(members[1].objective, Objective::Hp);
    }

    #[test]
    fn test_unknown_names_rejected() {
        let unknown_shiki = MemberConfig::new("ibara", "shadow");
        assert!(matches!(
            unknown_shiki.resolve(),
            Err(ConfigError::Plan(PlanError::UnknownShikigami(name))) if name == "ibara"
        ));

        let unknown_soul = MemberConfig::new("onikiri", "Shadoww");
        assert!(matches!(
            unknown_soul.resolve(),
            Err(ConfigError::Plan(PlanError::UnknownSoulType(name))) if name == "Shadoww"
        ));
    }

    #[test]
    fn test_invalid_requirement_rejected() {
        let mut member = MemberConfig::new("onikiri", "shadow");
        member.secondary = NameList::Many(vec!["odokuro".into(), "harpy".into()]);
        assert!(matches!(
            member.resolve(),
            Err(ConfigError::Plan(PlanError::InvalidRequirement(_)))
        ));
    }

    #[test]
    fn test_bad_constraint_rejected() {
        let yaml = "- { name: onikiri, primary: shadow, constraints: { atk: 100 } }";
        assert!(TeamConfig::from_yaml_str(yaml).is_err());

        let yaml = "- { name: onikiri, primary: shadow, constraints: { spd: 1-2-3 } }";
        assert!(TeamConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_empty_team_rejected() {
        assert!(matches!(
            TeamConfig::new().resolve(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_constraint_args() {
        let (attr, range) = parse_constraint_arg("crit=90-").unwrap();
        let member = MemberConfig::new("onikiri", "shadow").with_constraint(attr, range);
        let resolved = member.resolve().unwrap();
        assert_eq!(resolved.constraints.get(Attribute::Crit), Some(RangeConstraint::at_least(90)));

        assert!(matches!(parse_constraint_arg("crit"), Err(ConfigError::Invalid(_))));
        assert!(matches!(parse_constraint_arg("atk=5"), Err(ConfigError::Constraint(_))));
        assert!(matches!(parse_constraint_arg("spd=fast"), Err(ConfigError::Constraint(_))));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("team.yaml");
        std::fs::write(&yaml, TEAM_YAML).unwrap();
        assert_eq!(TeamConfig::load(&yaml).unwrap().len(), 3);

        let toml = dir.path().join("team.TOML");
        std::fs::write(&toml, "[[members]]\nname = \"onikiri\"\nprimary = \"shadow\"\n").unwrap();
        assert_eq!(TeamConfig::load(&toml).unwrap().len(), 1);
    }
}

// ============================================================================
// SoulDb
// ============================================================================

mod soul_db {
    use super::*;

    const DB_YAML: &str = r#"
slot1:
  - { type: Shadow, atk: 486, crit: 8 }
  - { type: seductress, atk: 470, critdmg: 12 }
slot2:
  - { type: shadow, atkbonus: 55, spd: 12 }
slot3:
  - { type: odokuro, hpbonus: 5 }
slot4:
  - { type: shadow, crit_dmg: 20 }
slot5:
  - { type: shadow, hp: 300 }
"#;

    #[test]
    fn test_yaml_with_aliases() {
        let db = SoulDb::from_yaml_str(DB_YAML).unwrap();
        assert_eq!(db.len(), 6);
        assert_eq!(db.slot1[0].kind, "shadow");
        assert_eq!(db.slot1[1].crit_dmg, 12);
        assert_eq!(db.slot2[0].atk_bonus, 55);
        assert_eq!(db.slot3[0].hp_bonus, 5);
        assert!(db.slot6.is_empty());
    }

    #[test]
    fn test_unknown_soul_type_rejected() {
        let yaml = "slot1:\n  - { type: mystery, atk: 1 }\n";
        assert!(matches!(
            SoulDb::from_yaml_str(yaml),
            Err(ConfigError::Plan(PlanError::UnknownSoulType(kind))) if kind == "mystery"
        ));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(SoulDb::from_yaml_str("slot7: []\n").is_err());
        assert!(SoulDb::from_yaml_str("slot1:\n  - { type: shadow, def: 3 }\n").is_err());
    }

    #[test]
    fn test_inventory_conversion() {
        let db = SoulDb::from_yaml_str(DB_YAML).unwrap();
        let inventory = Inventory::from(db.clone());
        assert_eq!(inventory.slot(0).len(), 2);
        assert_eq!(inventory.slot(5).len(), 0);
        assert_eq!(SoulDb::from(inventory), db);
    }

    #[test]
    fn test_save_after_removal() {
        let dir = tempfile::tempdir().unwrap();
        let mut db = SoulDb::from_yaml_str(DB_YAML).unwrap();
        db.slot6.push(Soul::new("shadow").with_spd(3));

        let claimed = [
            db.slot1[0].clone(),
            db.slot2[0].clone(),
            db.slot3[0].clone(),
            db.slot4[0].clone(),
            db.slot5[0].clone(),
            db.slot6[0].clone(),
        ];
        let mut inventory = Inventory::from(db);
        inventory.remove(&claimed).unwrap();

        let path = dir.path().join("souls.yaml");
        SoulDb::from(inventory).save(&path).unwrap();

        let reloaded = SoulDb::load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.slot1[0].kind, "seductress");
    }

    #[test]
    fn test_toml_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut db = SoulDb::default();
        db.slot1.push(Soul::new("harpy").with_atk(100).with_spd(5));
        db.slot6.push(Soul::new("jizo statue").with_hp_bonus(10));

        let path = dir.path().join("souls.toml");
        db.save(&path).unwrap();
        assert_eq!(SoulDb::load(&path).unwrap(), db);

        let yaml_path = dir.path().join("souls.yml");
        db.save(&yaml_path).unwrap();
        assert_eq!(SoulDb::load(&yaml_path).unwrap(), db);
    }
}
