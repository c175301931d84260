//! Binary to resolve TypeScript declaration generator settings.
//!
//! Usage: `hubstsgen -a Hubs.dll -o ./typings/ -s -n RequiredAttribute`
//!
//! Decodes the options and writes the resolved generation plan as JSON to
//! stdout (or to `--plan <FILE>`). Set `RUST_LOG=debug` for decoding details.

use std::io::stdout;
use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use hubs_ts_gen::{GenerationPlan, RawOptions, write_plan_to_file, write_plan_to_writer};
use tracing_subscriber::EnvFilter;

const ASSEMBLY: &str = "assembly";
const OUTPUT: &str = "output";
const REFERENCES: &str = "references";
const OPTIONAL_MEMBERS: &str = "optionalMembers";
const STRICT_TYPES: &str = "strictTypes";
const NOT_NULLABLE_TYPES: &str = "notNullableTypes";
const INCLUDE_TYPES: &str = "includeTypes";
const INCLUDE_ALL_DATA_CONTRACTS: &str = "includeAllDataContracts";
const ENUM_MEMBER_NAMES: &str = "enumMemberNames";
const PLAN: &str = "plan";

const OUTPUT_HELP: &str =
    "The path to the file to generate. If this is empty, the output is written to stdout.";
const REFERENCES_HELP: &str =
    "List of file paths, delimited by semicolon, to be added as <reference/> directives";
const NOT_NULLABLE_TYPES_HELP: &str =
    "Method to discover members treated as not-nullable: None, RequiredAttribute";
const ENUM_MEMBER_NAMES_HELP: &str =
    "Enum member name mapping: Default, CamelCase, LowerCase, UpperCase, EnumMemberAttribute";

/// Arguments after parsing: the raw options and where the plan goes.
struct Invocation {
    options: RawOptions,
    plan_path: Option<PathBuf>,
}

fn command() -> Command {
    Command::new("hubstsgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve settings for generating TypeScript declarations from a hub assembly.")
        .arg(
            Arg::new(ASSEMBLY)
                .short('a')
                .long(ASSEMBLY)
                .required(true)
                .help("The path to the assembly (.dll/.exe)"),
        )
        .arg(
            Arg::new(OUTPUT)
                .short('o')
                .long(OUTPUT)
                .help(OUTPUT_HELP),
        )
        .arg(
            Arg::new(REFERENCES)
                .short('r')
                .long(REFERENCES)
                .help(REFERENCES_HELP),
        )
        .arg(
            Arg::new(OPTIONAL_MEMBERS)
                .short('p')
                .long(OPTIONAL_MEMBERS)
                .default_value("None")
                .help("Method to discover members treated as optional: None, DataMemberAttribute"),
        )
        .arg(
            Arg::new(STRICT_TYPES)
                .short('s')
                .long(STRICT_TYPES)
                .action(ArgAction::SetTrue)
                .help("If set, union definitions with 'null' are generated for nullable types"),
        )
        .arg(
            Arg::new(NOT_NULLABLE_TYPES)
                .short('n')
                .long(NOT_NULLABLE_TYPES)
                .help(NOT_NULLABLE_TYPES_HELP),
        )
        .arg(
            Arg::new(INCLUDE_TYPES)
                .short('i')
                .long(INCLUDE_TYPES)
                .help("Method to discover additional types to include: None, KnownTypeAttribute"),
        )
        .arg(
            Arg::new(INCLUDE_ALL_DATA_CONTRACTS)
                .short('d')
                .long(INCLUDE_ALL_DATA_CONTRACTS)
                .action(ArgAction::SetTrue)
                .help("Include all types marked with [DataContract]"),
        )
        .arg(
            Arg::new(ENUM_MEMBER_NAMES)
                .short('e')
                .long(ENUM_MEMBER_NAMES)
                .default_value("Default")
                .help(ENUM_MEMBER_NAMES_HELP),
        )
        .arg(
            Arg::new(PLAN)
                .long(PLAN)
                .value_parser(value_parser!(PathBuf))
                .help("Write the resolved plan to this file instead of stdout"),
        )
}

fn invocation_from_matches(matches: &ArgMatches) -> Invocation {
    let string = |id: &str| matches.get_one::<String>(id).cloned();
    Invocation {
        options: RawOptions {
            assembly_path: string(ASSEMBLY).unwrap_or_default(),
            output: string(OUTPUT),
            references: string(REFERENCES),
            optional_members: string(OPTIONAL_MEMBERS),
            strict_types: matches.get_flag(STRICT_TYPES),
            not_nullable_types: string(NOT_NULLABLE_TYPES),
            include_types: string(INCLUDE_TYPES),
            include_all_data_contracts: matches.get_flag(INCLUDE_ALL_DATA_CONTRACTS),
            enum_member_names: string(ENUM_MEMBER_NAMES),
        },
        plan_path: matches.get_one::<PathBuf>(PLAN).cloned(),
    }
}

fn init_tracing() {
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let Invocation { options, plan_path } = invocation_from_matches(&command().get_matches());

    let plan: GenerationPlan = match options.resolve() {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    if plan.writes_to_stdout() {
        tracing::info!("declarations will be written to stdout");
    }

    let written = match plan_path {
        Some(path) => write_plan_to_file(&plan, path),
        None => write_plan_to_writer(&plan, &mut stdout()),
    };
    if let Err(e) = written {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Invocation {
        let matches: ArgMatches = command()
            .try_get_matches_from(args)
            .expect("arguments should parse");
        invocation_from_matches(&matches)
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn assembly_is_required() {
        let actual = command().try_get_matches_from(["hubstsgen", "-o", "out.d.ts"]);
        assert!(actual.is_err());
    }

    #[test]
    fn short_flags_map_to_raw_options() {
        let actual: Invocation = parse(&[
            "hubstsgen",
            "-a",
            "Hubs.dll",
            "-o",
            "typings.d.ts",
            "-r",
            "jquery.d.ts;signalr.d.ts",
            "-p",
            "DataMemberAttribute",
            "-s",
            "-n",
            "RequiredAttribute",
            "-i",
            "KnownTypeAttribute",
            "-d",
            "-e",
            "CamelCase",
        ]);
        let expected: RawOptions = RawOptions {
            assembly_path: "Hubs.dll".to_string(),
            output: Some("typings.d.ts".to_string()),
            references: Some("jquery.d.ts;signalr.d.ts".to_string()),
            optional_members: Some("DataMemberAttribute".to_string()),
            strict_types: true,
            not_nullable_types: Some("RequiredAttribute".to_string()),
            include_types: Some("KnownTypeAttribute".to_string()),
            include_all_data_contracts: true,
            enum_member_names: Some("CamelCase".to_string()),
        };
        assert_eq!(expected, actual.options);
        assert_eq!(None, actual.plan_path);
    }

    #[test]
    fn long_flags_and_defaults() {
        let actual: Invocation = parse(&[
            "hubstsgen",
            "--assembly",
            "Hubs.dll",
            "--includeAllDataContracts",
            "--plan",
            "plan.json",
        ]);
        assert_eq!(Some(PathBuf::from("plan.json")), actual.plan_path);

        let options: RawOptions = actual.options;
        assert_eq!(Some("None".to_string()), options.optional_members);
        assert_eq!(Some("Default".to_string()), options.enum_member_names);
        assert!(options.include_all_data_contracts);
        assert!(!options.strict_types);
        assert_eq!(None, options.output);
    }
}
