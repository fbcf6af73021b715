//! Probe definitions and the registry that holds them.
//!
//! The built-in battery covers the tools found on the CI farm's build and
//! test hosts. Projects can add probes, or replace built-in ones by name,
//! from configuration.

use regex::Regex;

use crate::error::{CensusError, Result};

use super::prober::{CMakeProjectProbe, CommandProbe, Extractor, Prober};
use super::runner::Invocation;

/// Data describing one probe, before its pattern is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSpec {
    /// Tool name as written in the report.
    pub name: String,
    /// Commands to try in order. Ignored when `cmake_project` is set.
    pub invocations: Vec<Invocation>,
    /// Extraction pattern; `None` takes the whole output.
    pub pattern: Option<String>,
    /// Capture group holding the version.
    pub group: Option<usize>,
    /// Read stderr as well as stdout.
    pub merge_stderr: bool,
    /// `CMakeLists.txt` content of a scratch project to configure.
    pub cmake_project: Option<String>,
}

impl ProbeSpec {
    /// Compile into a runnable probe.
    pub fn compile(&self) -> Result<Box<dyn Prober>> {
        let extractor = match &self.pattern {
            Some(pattern) => {
                let regex = Regex::new(pattern).map_err(|e| CensusError::InvalidPattern {
                    probe: self.name.clone(),
                    message: e.to_string(),
                })?;
                Extractor::pattern(regex, self.group)
            }
            None => Extractor::WholeOutput,
        };

        Ok(match &self.cmake_project {
            Some(cmakelists) => Box::new(CMakeProjectProbe::new(
                self.name.clone(),
                cmakelists.clone(),
                extractor,
            )),
            None => Box::new(CommandProbe::new(
                self.name.clone(),
                self.invocations.clone(),
                extractor,
                self.merge_stderr,
            )),
        })
    }
}

/// Static definition of a built-in probe.
struct BuiltinDef {
    name: &'static str,
    commands: &'static [&'static [&'static str]],
    pattern: Option<&'static str>,
    group: Option<usize>,
    merge_stderr: bool,
    cmake_project: Option<&'static str>,
}

/// Built-in probes, in report order.
const BUILTIN_DEFS: &[BuiltinDef] = &[
    BuiltinDef {
        name: "Conan",
        commands: &[&["conan", "--version"]],
        pattern: Some(r"Conan version (.*)"),
        group: None,
        merge_stderr: false,
        cmake_project: None,
    },
    BuiltinDef {
        name: "Python",
        commands: &[&["python3", "--version"], &["python", "--version"]],
        pattern: Some(r"Python ([0-9][^\s]*)"),
        group: None,
        merge_stderr: true,
        cmake_project: None,
    },
    BuiltinDef {
        name: "CMake",
        commands: &[&["cmake", "--version"]],
        pattern: Some(r"cmake version (.*)"),
        group: None,
        merge_stderr: false,
        cmake_project: None,
    },
    BuiltinDef {
        name: "Ninja",
        commands: &[&["ninja", "--version"]],
        pattern: None,
        group: None,
        merge_stderr: false,
        cmake_project: None,
    },
    BuiltinDef {
        name: "Java",
        commands: &[&["java", "-version"]],
        pattern: Some(r#"(java|openjdk) version "([0-9._]*).*""#),
        group: Some(2),
        merge_stderr: true,
        cmake_project: None,
    },
    BuiltinDef {
        name: "GCC",
        commands: &[&["gcc", "-dumpversion"]],
        pattern: None,
        group: None,
        merge_stderr: true,
        cmake_project: None,
    },
    BuiltinDef {
        name: "Mono",
        commands: &[&["mono", "--version"]],
        pattern: Some(r"Mono JIT compiler version ([.0-9]*)"),
        group: None,
        merge_stderr: false,
        cmake_project: None,
    },
    BuiltinDef {
        name: "Doxygen",
        commands: &[&["doxygen", "--version"]],
        pattern: None,
        group: None,
        merge_stderr: true,
        cmake_project: None,
    },
    BuiltinDef {
        name: "Graphviz",
        commands: &[&["dot", "-V"]],
        pattern: Some(r"dot - graphviz version ([.0-9]*)"),
        group: None,
        merge_stderr: true,
        cmake_project: None,
    },
    BuiltinDef {
        name: "Qt",
        commands: &[&["qmake", "-version"], &["qmake-qt5", "-version"]],
        pattern: Some(r"Using Qt version ([.0-9]*)"),
        group: None,
        merge_stderr: false,
        cmake_project: None,
    },
    BuiltinDef {
        name: "Boost",
        commands: &[],
        pattern: Some(r#"Found Boost: .* \(found version "([.0-9]*)"\)"#),
        group: None,
        merge_stderr: false,
        cmake_project: Some(
            "project(foo CXX)\ncmake_minimum_required(VERSION 3.10)\nfind_package(Boost REQUIRED)\n",
        ),
    },
    BuiltinDef {
        name: "MSVC",
        commands: &[],
        pattern: Some(r"The CXX compiler identification is MSVC ([.0-9]*)"),
        group: None,
        merge_stderr: false,
        cmake_project: Some("project(foo CXX)\n"),
    },
    BuiltinDef {
        name: "NSIS",
        commands: &[&["makensis", "-version"]],
        pattern: None,
        group: None,
        merge_stderr: true,
        cmake_project: None,
    },
];

/// Specs of the built-in probes, in report order.
pub fn builtin_specs() -> Vec<ProbeSpec> {
    BUILTIN_DEFS
        .iter()
        .map(|def| ProbeSpec {
            name: def.name.to_string(),
            invocations: def
                .commands
                .iter()
                .filter_map(|argv| {
                    let (program, args) = argv.split_first()?;
                    Some(Invocation::new(*program, args.iter().copied()))
                })
                .collect(),
            pattern: def.pattern.map(str::to_string),
            group: def.group,
            merge_stderr: def.merge_stderr,
            cmake_project: def.cmake_project.map(str::to_string),
        })
        .collect()
}

/// Overlay `custom` specs onto `base`: same name replaces in place,
/// new names are appended.
pub fn merge_specs(base: Vec<ProbeSpec>, custom: Vec<ProbeSpec>) -> Vec<ProbeSpec> {
    let mut merged = base;
    for spec in custom {
        match merged.iter_mut().find(|existing| existing.name == spec.name) {
            Some(existing) => *existing = spec,
            None => merged.push(spec),
        }
    }
    merged
}

/// An ordered battery of probes.
#[derive(Default)]
pub struct ProbeRegistry {
    probes: Vec<Box<dyn Prober>>,
}

impl ProbeRegistry {
    /// Registry with no probes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the built-in battery.
    pub fn builtin() -> Result<Self> {
        Self::from_specs(&builtin_specs())
    }

    /// Built-in battery overlaid with custom probes.
    pub fn with_custom(custom: Vec<ProbeSpec>) -> Result<Self> {
        Self::from_specs(&merge_specs(builtin_specs(), custom))
    }

    /// Compile every spec, in order.
    pub fn from_specs(specs: &[ProbeSpec]) -> Result<Self> {
        let probes = specs
            .iter()
            .map(ProbeSpec::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { probes })
    }

    /// Keep probes named in `only` (all if empty) and not named in `skip`.
    /// Names compare case-insensitively.
    pub fn filter(self, only: &[String], skip: &[String]) -> Self {
        let named = |list: &[String], name: &str| list.iter().any(|n| n.eq_ignore_ascii_case(name));
        let probes = self
            .probes
            .into_iter()
            .filter(|p| only.is_empty() || named(only, p.name()))
            .filter(|p| !named(skip, p.name()))
            .collect();
        Self { probes }
    }

    pub fn probes(&self) -> &[Box<dyn Prober>] {
        &self.probes
    }

    /// Probe names in order.
    pub fn names(&self) -> Vec<&str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}
