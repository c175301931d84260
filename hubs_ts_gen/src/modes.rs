//! Closed enumerations for every string-valued generator knob.
//!
//! Each mode carries an explicit keyword table. Keywords are stored lower-cased;
//! the option decoder folds raw input to lower case once and looks it up here.
//! The same keywords are used as the serde representation, so a serialized
//! plan reads exactly like the command line that produced it.

use crate::error::{OptionName, TsGenError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A mode decoded from a case-insensitive keyword.
pub trait KeywordMode: Copy + PartialEq + 'static {
    /// The knob this mode is decoded from.
    const OPTION: OptionName;

    /// Value used when the raw input is missing, empty or whitespace-only.
    const DEFAULT: Self;

    /// Lower-cased keyword to variant mapping.
    const KEYWORDS: &'static [(&'static str, Self)];

    /// Canonical keyword for this variant (the first table entry mapping to it).
    #[must_use]
    fn keyword(self) -> &'static str {
        Self::KEYWORDS
            .iter()
            .find(|(_, mode)| *mode == self)
            .map_or("", |(keyword, _)| *keyword)
    }
}

/// How interface members are marked optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionalMemberGenerationMode {
    /// Members are never declared optional.
    #[default]
    #[serde(rename = "none")]
    None,
    /// Members whose `[DataMember]` attribute has `IsRequired = false` are optional.
    #[serde(rename = "datamemberattribute")]
    UseDataMemberAttribute,
}

impl KeywordMode for OptionalMemberGenerationMode {
    const OPTION: OptionName = OptionName::OptionalMembers;
    const DEFAULT: Self = Self::None;
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("none", Self::None),
        ("datamemberattribute", Self::UseDataMemberAttribute),
    ];
}

/// How members that must not be declared nullable are discovered.
///
/// Only consulted when strict types are generated; stored regardless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotNullableTypeDiscovery {
    /// Every nullable member gets a `null` union.
    #[default]
    #[serde(rename = "none")]
    None,
    /// Members carrying `[Required]` are emitted without a `null` union.
    #[serde(rename = "requiredattribute")]
    UseRequiredAttribute,
}

impl KeywordMode for NotNullableTypeDiscovery {
    const OPTION: OptionName = OptionName::NotNullableTypes;
    const DEFAULT: Self = Self::None;
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("none", Self::None),
        ("requiredattribute", Self::UseRequiredAttribute),
    ];
}

/// How types not directly referenced by hub members are pulled into the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncludedTypesDiscovery {
    /// Only reachable types are generated.
    #[default]
    #[serde(rename = "none")]
    None,
    /// Types listed through `[KnownType]` are generated as well.
    #[serde(rename = "knowntypeattribute")]
    UseKnownTypeAttribute,
}

impl KeywordMode for IncludedTypesDiscovery {
    const OPTION: OptionName = OptionName::IncludeTypes;
    const DEFAULT: Self = Self::None;
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("none", Self::None),
        ("knowntypeattribute", Self::UseKnownTypeAttribute),
    ];
}

/// How model enum member names map to member names in the generated typings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnumMemberNameMappingMode {
    /// Use the member name as declared.
    #[default]
    #[serde(rename = "default")]
    MemberName,
    /// Use the member name with its first letter lower-cased.
    #[serde(rename = "camelcase")]
    MemberNameCamelCase,
    /// Use the member name converted to lower case.
    #[serde(rename = "lowercase")]
    MemberNameLowerCase,
    /// Use the member name converted to upper case.
    #[serde(rename = "uppercase")]
    MemberNameUpperCase,
    /// Use the `[EnumMember]` value when present, the member name otherwise.
    #[serde(rename = "enummemberattribute")]
    EnumMemberAttributeValue,
}

impl KeywordMode for EnumMemberNameMappingMode {
    const OPTION: OptionName = OptionName::EnumMemberNames;
    const DEFAULT: Self = Self::MemberName;
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("default", Self::MemberName),
        ("camelcase", Self::MemberNameCamelCase),
        ("lowercase", Self::MemberNameLowerCase),
        ("uppercase", Self::MemberNameUpperCase),
        ("enummemberattribute", Self::EnumMemberAttributeValue),
    ];
}

impl EnumMemberNameMappingMode {
    /// Map a model enum member name to the name emitted in the typings.
    ///
    /// `enum_member_value` is the value of the member's `[EnumMember]` attribute,
    /// if it has one; it is only used by [`Self::EnumMemberAttributeValue`].
    #[must_use]
    pub fn map_member_name(self, member_name: &str, enum_member_value: Option<&str>) -> String {
        match self {
            Self::MemberName => member_name.to_string(),
            Self::MemberNameCamelCase => {
                let mut chars: std::str::Chars<'_> = member_name.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                }
            }
            Self::MemberNameLowerCase => member_name.to_lowercase(),
            Self::MemberNameUpperCase => member_name.to_uppercase(),
            Self::EnumMemberAttributeValue => enum_member_value.unwrap_or(member_name).to_string(),
        }
    }
}

impl fmt::Display for OptionalMemberGenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for NotNullableTypeDiscovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for IncludedTypesDiscovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for EnumMemberNameMappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for OptionalMemberGenerationMode {
    type Err = TsGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::options::decode_keyword(Some(s))
    }
}

impl FromStr for NotNullableTypeDiscovery {
    type Err = TsGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::options::decode_keyword(Some(s))
    }
}

impl FromStr for IncludedTypesDiscovery {
    type Err = TsGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::options::decode_keyword(Some(s))
    }
}

impl FromStr for EnumMemberNameMappingMode {
    type Err = TsGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::options::decode_keyword(Some(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_keyword_mode_defaults() {
        assert_eq!(
            OptionalMemberGenerationMode::default(),
            <OptionalMemberGenerationMode as KeywordMode>::DEFAULT
        );
        assert_eq!(
            NotNullableTypeDiscovery::default(),
            <NotNullableTypeDiscovery as KeywordMode>::DEFAULT
        );
        assert_eq!(
            IncludedTypesDiscovery::default(),
            <IncludedTypesDiscovery as KeywordMode>::DEFAULT
        );
        assert_eq!(
            EnumMemberNameMappingMode::default(),
            <EnumMemberNameMappingMode as KeywordMode>::DEFAULT
        );
    }

    #[test]
    fn keyword_tables_are_lower_case() {
        let keywords: Vec<&str> = OptionalMemberGenerationMode::KEYWORDS
            .iter()
            .map(|(k, _)| *k)
            .chain(NotNullableTypeDiscovery::KEYWORDS.iter().map(|(k, _)| *k))
            .chain(IncludedTypesDiscovery::KEYWORDS.iter().map(|(k, _)| *k))
            .chain(EnumMemberNameMappingMode::KEYWORDS.iter().map(|(k, _)| *k))
            .collect();
        for keyword in keywords {
            assert_eq!(
                keyword.to_lowercase(),
                keyword,
                "keyword {keyword} must be lower case"
            );
        }
    }

    #[test]
    fn display_prints_canonical_keyword() {
        assert_eq!("default", EnumMemberNameMappingMode::MemberName.to_string());
        assert_eq!(
            "enummemberattribute",
            EnumMemberNameMappingMode::EnumMemberAttributeValue.to_string()
        );
        assert_eq!(
            "datamemberattribute",
            OptionalMemberGenerationMode::UseDataMemberAttribute.to_string()
        );
        assert_eq!("none", IncludedTypesDiscovery::None.to_string());
    }

    #[test]
    fn display_then_parse_yields_same_variant() {
        for (_, mode) in EnumMemberNameMappingMode::KEYWORDS {
            let keyword: String = mode.to_string();
            let parsed: EnumMemberNameMappingMode =
                keyword.parse().expect("canonical keyword should parse");
            assert_eq!(*mode, parsed);
        }
    }

    #[test]
    fn from_str_rejects_unknown_keyword() {
        let actual: Result<NotNullableTypeDiscovery, TsGenError> = "NonNullAttribute".parse();
        assert!(matches!(
            actual,
            Err(TsGenError::UnsupportedOption {
                option: OptionName::NotNullableTypes,
                ref value,
            }) if value == "NonNullAttribute"
        ));
    }

    #[test]
    fn map_member_name_member_name_is_unchanged() {
        let actual: String = EnumMemberNameMappingMode::MemberName.map_member_name("InPlay", None);
        assert_eq!("InPlay", actual);
    }

    #[test]
    fn map_member_name_camel_case_lowers_first_letter_only() {
        let actual: String =
            EnumMemberNameMappingMode::MemberNameCamelCase.map_member_name("HTTPStatus", None);
        assert_eq!("hTTPStatus", actual);
    }

    #[test]
    fn map_member_name_camel_case_empty_name() {
        let actual: String =
            EnumMemberNameMappingMode::MemberNameCamelCase.map_member_name("", None);
        assert_eq!("", actual);
    }

    #[test]
    fn map_member_name_lower_and_upper_case() {
        assert_eq!(
            "inplay",
            EnumMemberNameMappingMode::MemberNameLowerCase.map_member_name("InPlay", None)
        );
        assert_eq!(
            "INPLAY",
            EnumMemberNameMappingMode::MemberNameUpperCase.map_member_name("InPlay", None)
        );
    }

    #[test]
    fn map_member_name_enum_member_attribute_uses_value_when_present() {
        let mode: EnumMemberNameMappingMode = EnumMemberNameMappingMode::EnumMemberAttributeValue;
        assert_eq!("in-play", mode.map_member_name("InPlay", Some("in-play")));
        assert_eq!("InPlay", mode.map_member_name("InPlay", None));
    }

    #[test]
    fn serde_uses_keywords() {
        let actual: String = serde_json::to_string(&EnumMemberNameMappingMode::MemberNameUpperCase)
            .expect("enum should serialize");
        assert_eq!("\"uppercase\"", actual);

        let parsed: IncludedTypesDiscovery =
            serde_json::from_str("\"knowntypeattribute\"").expect("keyword should deserialize");
        assert_eq!(IncludedTypesDiscovery::UseKnownTypeAttribute, parsed);
    }
}
