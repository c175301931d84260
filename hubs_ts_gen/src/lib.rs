//! Resolve the settings that drive TypeScript declaration generation for RPC
//! hub assemblies.
//!
//! Raw command-line values go in as [`RawOptions`]; [`RawOptions::resolve`]
//! decodes them into an immutable [`GeneratorSettings`] plus the output path,
//! bundled as a [`GenerationPlan`] for the declaration emitter.

mod error;
mod modes;
mod options;
mod plan;
mod settings;

pub use error::{OptionName, TsGenError};
pub use modes::{
    EnumMemberNameMappingMode, IncludedTypesDiscovery, KeywordMode, NotNullableTypeDiscovery,
    OptionalMemberGenerationMode,
};
pub use options::{
    DECLARATION_FILE_SUFFIX, REFERENCE_PATH_DELIMITER, RawOptions, decode_enum_member_name_mapping,
    decode_included_types_discovery, decode_keyword, decode_not_nullable_discovery,
    decode_optional_member_mode, output_path, parse_reference_paths,
};
pub use plan::GenerationPlan;
pub use settings::GeneratorSettings;

use std::io::Write;
use std::path::Path;

/// Write a resolved plan as JSON to `writer`.
///
/// The writer can be any type implementing `Write`, such as `File`, `Vec<u8>`, or
/// `Stdout`.
///
/// # Errors
///
/// Returns `TsGenError` if serialization or writing fails.
pub fn write_plan_to_writer<W: Write>(
    plan: &GenerationPlan,
    writer: &mut W,
) -> Result<(), TsGenError> {
    plan::write_plan_to_writer(plan, writer)
}

/// Write a resolved plan as JSON to a file, replacing its contents.
///
/// # Errors
///
/// Returns `TsGenError` if the file cannot be created or writing fails.
pub fn write_plan_to_file(
    plan: &GenerationPlan,
    plan_path: impl AsRef<Path>,
) -> Result<(), TsGenError> {
    let mut output_file: std::fs::File = std::fs::File::create(plan_path)?;
    write_plan_to_writer(plan, &mut output_file)
}
