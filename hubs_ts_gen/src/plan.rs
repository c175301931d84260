//! The resolved plan handed to the declaration emitter.

use crate::error::TsGenError;
use crate::settings::GeneratorSettings;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Settings plus the file the declarations go to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPlan {
    pub settings: GeneratorSettings,

    /// `None` or empty: write the declarations to stdout.
    pub output_path: Option<String>,
}

impl GenerationPlan {
    /// True when declarations should be written to standard output.
    #[must_use]
    pub fn writes_to_stdout(&self) -> bool {
        self.output_path
            .as_deref()
            .is_none_or(|path| path.trim().is_empty())
    }
}

/// Write `plan` as pretty-printed JSON followed by a newline.
pub(crate) fn write_plan_to_writer<W: Write>(
    plan: &GenerationPlan,
    writer: &mut W,
) -> Result<(), TsGenError> {
    serde_json::to_writer_pretty(&mut *writer, plan)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::IncludedTypesDiscovery;

    fn plan(output_path: Option<&str>) -> GenerationPlan {
        GenerationPlan {
            settings: GeneratorSettings::DEFAULT.with_assembly_path("hubs.dll"),
            output_path: output_path.map(ToString::to_string),
        }
    }

    #[test]
    fn writes_to_stdout_when_output_is_absent_or_blank() {
        assert!(plan(None).writes_to_stdout());
        assert!(plan(Some("")).writes_to_stdout());
        assert!(plan(Some(" ")).writes_to_stdout());
        assert!(!plan(Some("hubs.d.ts")).writes_to_stdout());
    }

    #[test]
    fn write_plan_to_writer_emits_json() {
        let mut known_types: GenerationPlan = plan(Some("hubs.d.ts"));
        known_types.settings = known_types
            .settings
            .with_included_types(IncludedTypesDiscovery::UseKnownTypeAttribute);

        let mut output: Vec<u8> = Vec::new();
        write_plan_to_writer(&known_types, &mut output)
            .expect("write_plan_to_writer should succeed");

        let actual: String = String::from_utf8(output).expect("output should be valid UTF-8");
        assert!(actual.ends_with("}\n"));

        let actual: serde_json::Value =
            serde_json::from_str(&actual).expect("output should be valid JSON");
        assert_eq!("hubs.d.ts", actual["outputPath"]);
        assert_eq!("hubs.dll", actual["settings"]["assemblyPath"]);
        assert_eq!(
            "knowntypeattribute",
            actual["settings"]["includedTypesDiscovery"]
        );
    }

    #[test]
    fn written_plan_reads_back() {
        let expected: GenerationPlan = plan(None);
        let mut output: Vec<u8> = Vec::new();
        write_plan_to_writer(&expected, &mut output).expect("write_plan_to_writer should succeed");

        let actual: GenerationPlan =
            serde_json::from_slice(&output).expect("plan should deserialize");
        assert_eq!(expected, actual);
    }
}
