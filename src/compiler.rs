//! Group compilation and whole-project `compile` / `check`.
//!
//! A group is compiled entirely in memory by [`compile_group`]. [`compile`]
//! builds every group first and writes output only once all of them
//! succeeded, so a failing run leaves the previous output untouched.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    config::{Config, ConfigLoadResult},
    core::{
        aggregate::aggregate,
        flatten::{find_duplicate_path, flatten_document},
        identifier::{IdentifierRegistry, namespace_name},
        message::{MessageCatalog, MessageRecord},
        namespace::build_namespace,
        validate::validate,
    },
    emit::{
        INDEX_FILE_NAME, MODULE_FILE_NAME, RUNTIME_EXPORTS, RUNTIME_FILE_NAME,
        accessor::AccessorDecl,
        index::{ExportEntry, emit_index, module_import_path},
        module::emit_module,
        runtime::emit_runtime,
    },
    error::{Error, Result},
    parsers::json::{
        MessageGroup, ROOT_GROUP_NAME, ScanWarning, parse_json_file, scan_message_groups,
    },
};

/// Decoded locale documents of one group, in configured locale order.
pub type GroupDocuments = Vec<(String, Value)>;

/// A group's catalog before validation.
#[derive(Debug)]
pub struct GroupAnalysis {
    pub catalog: MessageCatalog,
    /// Records flattened from each locale document.
    pub record_counts: Vec<(String, usize)>,
}

#[derive(Debug)]
pub struct CompiledGroup {
    /// Display name, `(root)` for the root group.
    pub name: String,
    pub rel_path: String,
    pub message_count: usize,
    pub record_counts: Vec<(String, usize)>,
    /// Contents of the group's `messages.ts`.
    pub source: String,
    pub exports: ExportEntry,
}

pub fn display_name(rel_path: &str) -> &str {
    if rel_path.is_empty() {
        ROOT_GROUP_NAME
    } else {
        rel_path
    }
}

pub fn load_documents(group: &MessageGroup) -> Result<GroupDocuments> {
    group
        .files
        .iter()
        .map(|file| Ok((file.locale.clone(), parse_json_file(&file.path)?)))
        .collect()
}

/// Flattens every locale document and aggregates them into one catalog.
pub fn analyze_group(group: &str, documents: &[(String, Value)]) -> Result<GroupAnalysis> {
    let mut flattened: Vec<(&str, Vec<MessageRecord>)> = Vec::with_capacity(documents.len());
    for (locale, document) in documents {
        let records = flatten_document(document);
        if let Some(path) = find_duplicate_path(&records) {
            return Err(Error::AmbiguousPath {
                group: group.to_string(),
                locale: locale.clone(),
                path,
            });
        }
        flattened.push((locale.as_str(), records));
    }

    let catalog = aggregate(flattened.iter().map(|(l, r)| (*l, r.as_slice())));
    let record_counts = flattened
        .iter()
        .map(|(locale, records)| (locale.to_string(), records.len()))
        .collect();

    Ok(GroupAnalysis {
        catalog,
        record_counts,
    })
}

/// Runs the full pipeline for one group without touching the filesystem.
pub fn compile_group(
    rel_path: &str,
    documents: &[(String, Value)],
    config: &Config,
) -> Result<CompiledGroup> {
    let name = display_name(rel_path);
    let GroupAnalysis {
        catalog,
        record_counts,
    } = analyze_group(name, documents)?;

    if config.validate_translations {
        validate(&config.locales, &config.default_locale, &catalog, name)?;
    }

    let mut registry = IdentifierRegistry::new();
    for runtime_name in RUNTIME_EXPORTS {
        registry.register(runtime_name, RUNTIME_FILE_NAME, name)?;
    }

    let decls: Vec<AccessorDecl> = catalog
        .iter()
        .map(|(path, data)| AccessorDecl::new(path, data, rel_path))
        .collect();
    for decl in &decls {
        registry.register(&decl.identifier, decl.path, name)?;
        if let Some(params_type) = &decl.params_type {
            registry.register(params_type, decl.path, name)?;
        }
    }

    let namespace = if config.generate_namespaces {
        let const_name = namespace_name(rel_path);
        registry.register(&const_name, "namespace", name)?;
        let root = build_namespace(&catalog, rel_path, &config.default_locale, name)?;
        Some((const_name, root))
    } else {
        None
    };

    let source = emit_module(
        rel_path,
        &decls,
        namespace.as_ref().map(|(n, root)| (n.as_str(), root)),
        &config.default_locale,
    );

    let exports = ExportEntry {
        group: name.to_string(),
        module_path: module_import_path(rel_path),
        accessors: decls.iter().map(|d| d.identifier.clone()).collect(),
        params_types: decls.iter().filter_map(|d| d.params_type.clone()).collect(),
        namespace: namespace.map(|(n, _)| n),
    };

    Ok(CompiledGroup {
        name: name.to_string(),
        rel_path: rel_path.to_string(),
        message_count: catalog.len(),
        record_counts,
        source,
        exports,
    })
}

/// Rejects names exported by more than one module of the combined index.
pub fn check_index_exports(entries: &[ExportEntry]) -> Result<()> {
    let mut registry = IdentifierRegistry::new();
    for runtime_name in RUNTIME_EXPORTS {
        registry.register(runtime_name, RUNTIME_FILE_NAME, INDEX_FILE_NAME)?;
    }
    for entry in entries {
        for name in entry.names() {
            registry.register(name, &entry.group, INDEX_FILE_NAME)?;
        }
    }
    Ok(())
}

/// A file to write, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: String,
}

pub fn module_output_path(rel_path: &str) -> PathBuf {
    let mut path = PathBuf::from("messages");
    for component in rel_path.split('/').filter(|s| !s.is_empty()) {
        path.push(component);
    }
    path.join(MODULE_FILE_NAME)
}

/// All output files of a run: runtime, one module per group, then the index.
pub fn plan_output(groups: &[CompiledGroup], config: &Config) -> Result<Vec<OutputFile>> {
    let entries: Vec<ExportEntry> = groups.iter().map(|g| g.exports.clone()).collect();
    check_index_exports(&entries)?;

    let mut files = vec![OutputFile {
        path: PathBuf::from(RUNTIME_FILE_NAME),
        contents: emit_runtime(&config.locales, &config.default_locale),
    }];
    files.extend(groups.iter().map(|group| OutputFile {
        path: module_output_path(&group.rel_path),
        contents: group.source.clone(),
    }));
    files.push(OutputFile {
        path: PathBuf::from(INDEX_FILE_NAME),
        contents: emit_index(&entries),
    });
    Ok(files)
}

pub fn write_output(output_dir: &Path, files: &[OutputFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = output_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(&path, &file.contents).map_err(|e| Error::io(&path, e))?;
        written.push(path);
    }
    Ok(written)
}

#[derive(Debug)]
pub struct CompileOutcome {
    pub groups: Vec<CompiledGroup>,
    pub warnings: Vec<ScanWarning>,
    pub written: Vec<PathBuf>,
}

/// Compiles every group of the project and writes the output directory.
pub fn compile(loaded: &ConfigLoadResult) -> Result<CompileOutcome> {
    let config = &loaded.config;
    let scan = scan_message_groups(&loaded.messages_dir(), &config.locales)?;

    let mut groups = Vec::with_capacity(scan.groups.len());
    for group in &scan.groups {
        let documents = load_documents(group)?;
        groups.push(compile_group(&group.rel_path, &documents, config)?);
    }

    let files = plan_output(&groups, config)?;
    let written = write_output(&loaded.output_dir(), &files)?;

    Ok(CompileOutcome {
        groups,
        warnings: scan.warnings,
        written,
    })
}

#[derive(Debug)]
pub struct GroupCheck {
    pub name: String,
    pub message_count: usize,
    pub record_counts: Vec<(String, usize)>,
    /// Validation failure for this group, if any.
    pub failure: Option<Error>,
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub groups: Vec<GroupCheck>,
    pub warnings: Vec<ScanWarning>,
}

impl CheckOutcome {
    pub fn failed_groups(&self) -> impl Iterator<Item = &GroupCheck> {
        self.groups.iter().filter(|g| g.failure.is_some())
    }

    pub fn is_valid(&self) -> bool {
        self.failed_groups().next().is_none()
    }
}

/// Validates every group, whatever `validateTranslations` says.
///
/// Validation failures are collected per group; any other error aborts.
pub fn check(loaded: &ConfigLoadResult) -> Result<CheckOutcome> {
    let config = &loaded.config;
    let scan = scan_message_groups(&loaded.messages_dir(), &config.locales)?;

    let mut groups = Vec::with_capacity(scan.groups.len());
    for group in &scan.groups {
        let name = group.display_name();
        let documents = load_documents(group)?;
        let analysis = analyze_group(name, &documents)?;

        let failure = match validate(
            &config.locales,
            &config.default_locale,
            &analysis.catalog,
            name,
        ) {
            Ok(()) => None,
            Err(e) if e.is_validation_failure() => Some(e),
            Err(e) => return Err(e),
        };

        groups.push(GroupCheck {
            name: name.to_string(),
            message_count: analysis.catalog.len(),
            record_counts: analysis.record_counts,
            failure,
        });
    }

    Ok(CheckOutcome {
        groups,
        warnings: scan.warnings,
    })
}

/// Loads and analyzes the group at `rel_path` (empty for the root group).
pub fn load_group(loaded: &ConfigLoadResult, rel_path: &str) -> Result<GroupAnalysis> {
    let config = &loaded.config;
    let scan = scan_message_groups(&loaded.messages_dir(), &config.locales)?;
    let rel_path = rel_path.trim_matches('/');

    let group = scan
        .groups
        .iter()
        .find(|g| g.rel_path == rel_path)
        .ok_or_else(|| {
            let known: Vec<&str> = scan.groups.iter().map(MessageGroup::display_name).collect();
            Error::configuration(format!(
                "no message group \"{}\" (found: {})",
                display_name(rel_path),
                known.join(", ")
            ))
        })?;

    let documents = load_documents(group)?;
    analyze_group(group.display_name(), &documents)
}
