//! Settings for TypeScript declaration generation.

use crate::modes::{
    EnumMemberNameMappingMode, IncludedTypesDiscovery, NotNullableTypeDiscovery,
    OptionalMemberGenerationMode,
};
use serde::{Deserialize, Serialize};

/// Fully resolved settings that control declaration generation.
///
/// Values are immutable: every `with_*` method borrows the receiver and returns
/// a new `GeneratorSettings` that differs in exactly one logical field. No
/// validation happens here; the option decoder hands over typed values only.
///
/// **Default:** no assembly, no references, no optional members, no strict
/// types, no extra type discovery, enum members named as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorSettings {
    assembly_path: String,
    reference_paths: Vec<String>,
    optional_member_mode: OptionalMemberGenerationMode,
    strict_types: bool,
    not_nullable_discovery: NotNullableTypeDiscovery,
    included_types_discovery: IncludedTypesDiscovery,
    include_all_data_contracts: bool,
    enum_member_name_mapping: EnumMemberNameMappingMode,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl GeneratorSettings {
    /// Settings with no options selected.
    pub const DEFAULT: Self = Self {
        assembly_path: String::new(),
        reference_paths: Vec::new(),
        optional_member_mode: OptionalMemberGenerationMode::None,
        strict_types: false,
        not_nullable_discovery: NotNullableTypeDiscovery::None,
        included_types_discovery: IncludedTypesDiscovery::None,
        include_all_data_contracts: false,
        enum_member_name_mapping: EnumMemberNameMappingMode::MemberName,
    };

    /// Path of the assembly to generate declarations from.
    #[must_use]
    pub fn assembly_path(&self) -> &str {
        &self.assembly_path
    }

    /// Files emitted as `<reference path="..." />` directives, in order.
    #[must_use]
    pub fn reference_paths(&self) -> &[String] {
        &self.reference_paths
    }

    /// How interface members are marked optional.
    #[must_use]
    pub fn optional_member_mode(&self) -> OptionalMemberGenerationMode {
        self.optional_member_mode
    }

    /// Whether nullable members get an explicit `null` union, for use with
    /// `--strictNullChecks`.
    #[must_use]
    pub fn strict_types(&self) -> bool {
        self.strict_types
    }

    /// How not-nullable members are discovered. Only meaningful when
    /// [`Self::strict_types`] is `true`.
    #[must_use]
    pub fn not_nullable_discovery(&self) -> NotNullableTypeDiscovery {
        self.not_nullable_discovery
    }

    /// How types not used directly by hub members are discovered.
    #[must_use]
    pub fn included_types_discovery(&self) -> IncludedTypesDiscovery {
        self.included_types_discovery
    }

    /// Whether every `[DataContract]` type is generated regardless of reachability.
    #[must_use]
    pub fn include_all_data_contracts(&self) -> bool {
        self.include_all_data_contracts
    }

    /// How enum member names are mapped.
    #[must_use]
    pub fn enum_member_name_mapping(&self) -> EnumMemberNameMappingMode {
        self.enum_member_name_mapping
    }

    /// True when the emitter should consult [`Self::not_nullable_discovery`]:
    /// strict types are on and a discovery method is selected.
    #[must_use]
    pub fn is_not_nullable_discovery_active(&self) -> bool {
        self.strict_types && self.not_nullable_discovery != NotNullableTypeDiscovery::None
    }

    /// Copy with a different assembly path.
    #[must_use]
    pub fn with_assembly_path(&self, assembly_path: impl Into<String>) -> Self {
        Self {
            assembly_path: assembly_path.into(),
            ..self.clone()
        }
    }

    /// Replace the reference paths. An empty iterator clears them; duplicates are kept.
    #[must_use]
    pub fn with_reference_paths<I, S>(&self, reference_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reference_paths: reference_paths.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    /// Copy with a different optional member mode.
    #[must_use]
    pub fn with_optional_members(
        &self,
        optional_member_mode: OptionalMemberGenerationMode,
    ) -> Self {
        Self {
            optional_member_mode,
            ..self.clone()
        }
    }

    /// Copy with strict types switched on or off; discovery is left as is.
    #[must_use]
    pub fn with_strict_types(&self, strict_types: bool) -> Self {
        Self {
            strict_types,
            ..self.clone()
        }
    }

    /// Set the not-nullable discovery method without touching [`Self::strict_types`].
    #[must_use]
    pub fn with_not_nullable_discovery(
        &self,
        not_nullable_discovery: NotNullableTypeDiscovery,
    ) -> Self {
        Self {
            not_nullable_discovery,
            ..self.clone()
        }
    }

    /// Enable strict types and select the not-nullable discovery method in one step.
    #[must_use]
    pub fn with_strict_null_checks(
        &self,
        not_nullable_discovery: NotNullableTypeDiscovery,
    ) -> Self {
        Self {
            strict_types: true,
            not_nullable_discovery,
            ..self.clone()
        }
    }

    /// Copy with a different included types discovery method.
    #[must_use]
    pub fn with_included_types(&self, included_types_discovery: IncludedTypesDiscovery) -> Self {
        Self {
            included_types_discovery,
            ..self.clone()
        }
    }

    /// Copy with all `[DataContract]` types included or not.
    #[must_use]
    pub fn with_include_all_data_contracts(&self, include_all_data_contracts: bool) -> Self {
        Self {
            include_all_data_contracts,
            ..self.clone()
        }
    }

    /// Copy with a different enum member name mapping.
    #[must_use]
    pub fn with_enum_member_name_mapping(
        &self,
        enum_member_name_mapping: EnumMemberNameMappingMode,
    ) -> Self {
        Self {
            enum_member_name_mapping,
            ..self.clone()
        }
    }
}
