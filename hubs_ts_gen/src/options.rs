//! Option decoding: raw, loosely-typed user input to [`GeneratorSettings`].
//!
//! Every knob is decoded on its own. Keyword matching is case-insensitive;
//! missing, empty and whitespace-only values fall back to the knob's default,
//! while any other unrecognized value is an [`TsGenError::UnsupportedOption`].

use crate::error::TsGenError;
use crate::modes::{
    EnumMemberNameMappingMode, IncludedTypesDiscovery, KeywordMode, NotNullableTypeDiscovery,
    OptionalMemberGenerationMode,
};
use crate::plan::GenerationPlan;
use crate::settings::GeneratorSettings;
use std::path::{MAIN_SEPARATOR, is_separator};

/// File name suffix used when the output target is a directory.
pub const DECLARATION_FILE_SUFFIX: &str = ".d.ts";

/// Separator between entries of the raw reference path list.
pub const REFERENCE_PATH_DELIMITER: char = ';';

/// Raw option values as produced by argument parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    /// Path to the assembly (.dll/.exe).
    pub assembly_path: String,
    /// File or directory (trailing separator) to write to; absent means stdout.
    pub output: Option<String>,
    /// Semicolon-delimited reference paths.
    pub references: Option<String>,
    pub optional_members: Option<String>,
    pub strict_types: bool,
    pub not_nullable_types: Option<String>,
    pub include_types: Option<String>,
    pub include_all_data_contracts: bool,
    pub enum_member_names: Option<String>,
}

/// Decode a keyword for mode `M`.
///
/// # Errors
///
/// Returns `TsGenError::UnsupportedOption` if `raw` is non-blank and matches
/// none of `M::KEYWORDS` after lower-casing.
pub fn decode_keyword<M: KeywordMode>(raw: Option<&str>) -> Result<M, TsGenError> {
    let Some(value) = raw.filter(|v| !v.trim().is_empty()) else {
        return Ok(M::DEFAULT);
    };
    let lower: String = value.to_lowercase();
    M::KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == lower)
        .map(|(_, mode)| *mode)
        .ok_or_else(|| TsGenError::UnsupportedOption {
            option: M::OPTION,
            value: value.to_string(),
        })
}

/// Decode `--optionalMembers`.
///
/// # Errors
///
/// Returns `TsGenError::UnsupportedOption` for an unrecognized non-blank value.
pub fn decode_optional_member_mode(
    raw: Option<&str>,
) -> Result<OptionalMemberGenerationMode, TsGenError> {
    decode_keyword(raw)
}

/// Decode `--notNullableTypes`.
///
/// # Errors
///
/// Returns `TsGenError::UnsupportedOption` for an unrecognized non-blank value.
pub fn decode_not_nullable_discovery(
    raw: Option<&str>,
) -> Result<NotNullableTypeDiscovery, TsGenError> {
    decode_keyword(raw)
}

/// Decode `--includeTypes`.
///
/// # Errors
///
/// Returns `TsGenError::UnsupportedOption` for an unrecognized non-blank value.
pub fn decode_included_types_discovery(
    raw: Option<&str>,
) -> Result<IncludedTypesDiscovery, TsGenError> {
    decode_keyword(raw)
}

/// Decode `--enumMemberNames`.
///
/// # Errors
///
/// Returns `TsGenError::UnsupportedOption` for an unrecognized non-blank value.
pub fn decode_enum_member_name_mapping(
    raw: Option<&str>,
) -> Result<EnumMemberNameMappingMode, TsGenError> {
    decode_keyword(raw)
}

/// Split a semicolon-delimited reference list. Entries are trimmed, blank
/// entries dropped; order and duplicates are kept.
#[must_use]
pub fn parse_reference_paths(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(REFERENCE_PATH_DELIMITER)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToString::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Resolve the file the declarations are written to.
///
/// - A missing or blank `output` is returned unchanged (write to stdout).
/// - An `output` not ending in the platform separator is a file path and is
///   returned unchanged.
/// - Otherwise `output` is a directory and the file name is the assembly file
///   name without extension plus `.d.ts`.
///
/// Pure string arithmetic: the filesystem is never consulted.
#[must_use]
pub fn output_path(output: Option<&str>, assembly_path: &str) -> Option<String> {
    let output: &str = output?;
    if output.trim().is_empty() || !output.ends_with(MAIN_SEPARATOR) {
        return Some(output.to_string());
    }

    let assembly_name: &str = file_name_without_extension(assembly_path);
    let resolved: String = format!("{output}{assembly_name}{DECLARATION_FILE_SUFFIX}");
    tracing::debug!(output, resolved = %resolved, "output target treated as directory");
    Some(resolved)
}

/// Everything after the last separator, cut at its last `.`.
///
/// A trailing separator yields an empty name and a leading dot starts the
/// extension, so `bin/.dll` and `bin/hubs/` both give `""`.
fn file_name_without_extension(path: &str) -> &str {
    let file_name: &str = path.rsplit(is_separator).next().unwrap_or_default();
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(name, _)| name)
}

impl RawOptions {
    /// Decode every knob into a [`GeneratorSettings`].
    ///
    /// Strict types and not-nullable discovery are stored independently; the
    /// latter is kept even when strict types are off.
    ///
    /// # Errors
    ///
    /// Returns `TsGenError::UnsupportedOption` for the first knob (in
    /// declaration order) holding an unrecognized value.
    pub fn decode(&self) -> Result<GeneratorSettings, TsGenError> {
        let optional_members: OptionalMemberGenerationMode =
            decode_optional_member_mode(self.optional_members.as_deref())?;
        let not_nullable: NotNullableTypeDiscovery =
            decode_not_nullable_discovery(self.not_nullable_types.as_deref())?;
        let included_types: IncludedTypesDiscovery =
            decode_included_types_discovery(self.include_types.as_deref())?;
        let enum_member_names: EnumMemberNameMappingMode =
            decode_enum_member_name_mapping(self.enum_member_names.as_deref())?;
        let reference_paths: Vec<String> = parse_reference_paths(self.references.as_deref());

        tracing::debug!(
            assembly_path = %self.assembly_path,
            references = reference_paths.len(),
            %optional_members,
            strict_types = self.strict_types,
            %not_nullable,
            %included_types,
            include_all_data_contracts = self.include_all_data_contracts,
            %enum_member_names,
            "decoded generator options"
        );
        if !self.strict_types && not_nullable != NotNullableTypeDiscovery::None {
            tracing::debug!(
                %not_nullable,
                "not-nullable discovery has no effect without strict types"
            );
        }

        Ok(GeneratorSettings::DEFAULT
            .with_assembly_path(self.assembly_path.as_str())
            .with_reference_paths(reference_paths)
            .with_optional_members(optional_members)
            .with_strict_types(self.strict_types)
            .with_not_nullable_discovery(not_nullable)
            .with_included_types(included_types)
            .with_include_all_data_contracts(self.include_all_data_contracts)
            .with_enum_member_name_mapping(enum_member_names))
    }

    /// See [`output_path`].
    #[must_use]
    pub fn output_path(&self) -> Option<String> {
        output_path(self.output.as_deref(), &self.assembly_path)
    }

    /// Decode the settings and resolve the output path.
    ///
    /// # Errors
    ///
    /// Returns `TsGenError::UnsupportedOption` if any knob fails to decode.
    pub fn resolve(&self) -> Result<GenerationPlan, TsGenError> {
        let settings: GeneratorSettings = self.decode()?;
        Ok(GenerationPlan {
            settings,
            output_path: self.output_path(),
        })
    }
}
