//! Team files: the members to plan, in processing order.

use std::fmt;
use std::path::Path;

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use soulplan_core::{
    soul_type, Attribute, Constraints, Member, Modifiers, Objective, PlanError,
    RangeConstraint, SetRequirement, Shikigami, StatOptions,
};

use crate::ConfigError;

/// One soul type name or a list of them.
///
/// Lets a team file say `primary: shadow` as well as
/// `primary: [shadow, seductress]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NameList {
    One(String),
    Many(Vec<String>),
}

impl NameList {
    pub fn names(&self) -> &[String] {
        match self {
            NameList::One(name) => std::slice::from_ref(name),
            NameList::Many(names) => names,
        }
    }
}

impl Default for NameList {
    fn default() -> Self {
        NameList::Many(Vec::new())
    }
}

/// A team member as written in a team file, before name resolution.
///
/// ```yaml
/// name: onikiri
/// primary: shadow
/// secondary: [odokuro]
/// constraints: { spd: "128-", crit: 90- }
/// objective: damage
/// modifiers: { atk_bonus: 10 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct MemberConfig {
    /// Shikigami name or alias.
    pub name: String,

    #[serde(default)]
    pub primary: NameList,

    #[serde(default)]
    pub secondary: NameList,

    #[serde(default)]
    pub constraints: Constraints,

    #[serde(default)]
    pub objective: Objective,

    #[serde(default)]
    pub modifiers: Modifiers,

    #[serde(default)]
    pub options: StatOptions,
}

impl MemberConfig {
    /// A member with a single primary soul type and no other settings.
    pub fn new(name: impl Into<String>, primary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary: NameList::One(primary.into()),
            ..Self::default()
        }
    }

    pub fn with_constraint(mut self, attribute: Attribute, range: RangeConstraint) -> Self {
        self.constraints.insert(attribute, range);
        self
    }

    /// Resolves names against the catalogs and validates the set requirement.
    ///
    /// # Errors
    ///
    /// Fails on an unknown shikigami or soul type, or an invalid
    /// primary/secondary combination.
    pub fn resolve(&self) -> Result<Member, ConfigError> {
        let entry = Shikigami::lookup(&self.name)?;

        let primaries = known_soul_types(self.primary.names())?;
        let secondaries = known_soul_types(self.secondary.names())?;
        let requirement = SetRequirement::new(primaries, secondaries)?;

        Ok(Member::new(entry.name, entry.stats, requirement)
            .with_constraints(self.constraints.clone())
            .with_objective(self.objective)
            .with_modifiers(self.modifiers)
            .with_options(self.options))
    }
}

fn known_soul_types(names: &[String]) -> Result<Vec<String>, PlanError> {
    names
        .iter()
        .map(|name| match soul_type(name) {
            Some(known) => Ok(known.name.to_string()),
            None => Err(PlanError::UnknownSoulType(name.clone())),
        })
        .collect()
}

/// Parses a command-line constraint of the form `<attribute>=<range>`,
/// such as `spd=117-127` or `crit=90-`.
///
/// # Examples
///
/// ```
/// use soulplan_config::parse_constraint_arg;
/// use soulplan_core::{Attribute, RangeConstraint};
///
/// let (attr, range) = parse_constraint_arg("SPD=117-127").unwrap();
/// assert_eq!(attr, Attribute::Speed);
/// assert_eq!(range, RangeConstraint::between(117, 127).unwrap());
///
/// assert!(parse_constraint_arg("spd").is_err());
/// assert!(parse_constraint_arg("atk=100").is_err());
/// ```
pub fn parse_constraint_arg(arg: &str) -> Result<(Attribute, RangeConstraint), ConfigError> {
    let Some((attribute, range)) = arg.split_once('=') else {
        return Err(ConfigError::Invalid(format!(
            "Unknown argument {}, must be of the form <attribute>=<range>, such as spd=117-127 or crit=90-",
            arg
        )));
    };
    Ok((attribute.parse()?, range.parse()?))
}

/// An ordered team.
///
/// In YAML the file may be a bare list of members or a table with a
/// `members` key; TOML always uses `[[members]]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamConfig {
    pub members: Vec<MemberConfig>,
}

// Dispatches on the document shape so member errors keep their field names.
impl<'de> Deserialize<'de> for TeamConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TeamVisitor)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TeamTable {
    members: Vec<MemberConfig>,
}

struct TeamVisitor;

impl<'de> Visitor<'de> for TeamVisitor {
    type Value = TeamConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of members or a table with a `members` key")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        let members = Vec::<MemberConfig>::deserialize(SeqAccessDeserializer::new(seq))?;
        Ok(TeamConfig { members })
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let table = TeamTable::deserialize(MapAccessDeserializer::new(map))?;
        Ok(TeamConfig {
            members: table.members,
        })
    }
}

impl TeamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, member: MemberConfig) -> Self {
        self.members.push(member);
        self
    }

    /// Loads a team file, picking the format from the extension (`.toml`,
    /// anything else is read as YAML).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        if has_toml_extension(path) {
            Self::from_toml_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Resolves every member in order, failing on the first invalid one.
    pub fn resolve(&self) -> Result<Vec<Member>, ConfigError> {
        if self.members.is_empty() {
            return Err(ConfigError::Invalid("team has no members".to_string()));
        }
        self.members.iter().map(MemberConfig::resolve).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

pub(crate) fn has_toml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

