use apidoc_from_decorators::{
    cli::{IndexOrder, ListSections},
    generator::{DocumentationGenerator, GeneratorConfig},
    report::SkipReason,
    scanner::FileScanner,
    sink::{FileSystemSink, MemorySink},
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a temporary source tree under `src/<directory>`
fn create_test_project(directory: &str, files: Vec<(&str, &str)>) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source_dir = temp_dir.path().join("src").join(directory);
    fs::create_dir_all(&source_dir).expect("Failed to create source directory");

    for (name, content) in files {
        fs::write(source_dir.join(name), content).expect("Failed to write test file");
    }

    temp_dir
}

fn users_fixture() -> TempDir {
    create_test_project(
        "users",
        vec![
            ("findOne.ts", include_str!("fixtures/users/findOne.ts")),
            ("create.ts", include_str!("fixtures/users/create.ts")),
            ("users.module.ts", include_str!("fixtures/users/users.module.ts")),
        ],
    )
}

const FIND_ONE_ENTRY: &str = "\
export const usersDocumentationFindOne: ApiDocumentationParams = {
isAuth: true,
ok: {
type: UserDto,
    description: 'The user',
},
notFound: {},
params: [
{ name: 'id', type: String }
],
queries: [
{ name: 'expand', required: false }
],
};
";

const CREATE_ENTRY: &str = "\
export const usersDocumentationCreate: ApiDocumentationParams = {
created: {
type: UserDto
},
badRequest: {
description: 'Validation failed'
},
};
";

const PREPEND_INDEX: &str = "\
import { usersDocumentationFindOne } from './findOne';
import { usersDocumentationCreate } from './create';

export const usersDocumentation = {
  FIND_ONE: usersDocumentationFindOne,
  CREATE: usersDocumentationCreate,
};
";

#[test]
fn test_end_to_end_generation() {
    let temp_dir = users_fixture();

    let scan_result = FileScanner::new(temp_dir.path().join("src/users"))
        .scan()
        .expect("Failed to scan directory");
    assert_eq!(scan_result.files.len(), 3);

    let generator = DocumentationGenerator::new(GeneratorConfig::default());
    let mut sink = FileSystemSink::new(temp_dir.path().join("documentation"));
    let report = generator
        .generate("users", &scan_result.files, &mut sink)
        .expect("Failed to generate documentation");

    let docs = temp_dir.path().join("documentation/users");
    assert_eq!(fs::read_to_string(docs.join("findOne.ts")).unwrap(), FIND_ONE_ENTRY);
    assert_eq!(fs::read_to_string(docs.join("create.ts")).unwrap(), CREATE_ENTRY);
    assert_eq!(fs::read_to_string(docs.join("index.ts")).unwrap(), PREPEND_INDEX);
    assert!(!docs.join("users.module.ts").exists(), "Unannotated file must produce no output");

    let sources: Vec<_> = report.generated.iter().map(|g| g.source.as_str()).collect();
    assert_eq!(sources, vec!["create.ts", "findOne.ts"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::NoAnnotations);
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp_dir = users_fixture();
    let generator = DocumentationGenerator::new(GeneratorConfig::default());

    let mut runs = Vec::new();
    for _ in 0..2 {
        let scan_result = FileScanner::new(temp_dir.path().join("src/users")).scan().unwrap();
        let mut sink = FileSystemSink::new(temp_dir.path().join("documentation"));
        generator.generate("users", &scan_result.files, &mut sink).unwrap();

        let docs = temp_dir.path().join("documentation/users");
        let mut outputs: Vec<(String, Vec<u8>)> = fs::read_dir(&docs)
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                (e.file_name().to_string_lossy().to_string(), fs::read(e.path()).unwrap())
            })
            .collect();
        outputs.sort();
        runs.push(outputs);
    }

    assert_eq!(runs[0].len(), 3);
    assert_eq!(runs[0], runs[1]);
}

#[test]
fn test_index_has_one_line_per_generated_entry() {
    let temp_dir = create_test_project(
        "orders",
        vec![
            ("a.ts", "@ApiOkResponse({ type: A })"),
            ("b.ts", "@ApiQuery({ name: 'b' })"),
        ],
    );

    let scan_result = FileScanner::new(temp_dir.path().join("src/orders")).scan().unwrap();
    let mut sink = MemorySink::new();
    DocumentationGenerator::new(GeneratorConfig {
        index_order: IndexOrder::Insertion,
        ..Default::default()
    })
    .generate("orders", &scan_result.files, &mut sink)
    .unwrap();

    let index = sink.get("orders/index.ts").expect("Index should be written");
    let imports: Vec<_> = index.lines().filter(|l| l.starts_with("import ")).collect();
    assert_eq!(
        imports,
        vec![
            "import { ordersDocumentationA } from './a';",
            "import { ordersDocumentationB } from './b';",
        ]
    );
    assert!(index.contains("  A: ordersDocumentationA,\n  B: ordersDocumentationB,\n"));
}

#[test]
fn test_earliest_list_layout() {
    let temp_dir = create_test_project("auth", vec![("logout.ts", "@ApiCookieAuth()\nlogout() {}")]);

    let scan_result = FileScanner::new(temp_dir.path().join("src/auth")).scan().unwrap();
    let mut sink = MemorySink::new();
    DocumentationGenerator::new(GeneratorConfig {
        list_sections: ListSections::AlwaysEmit,
        ..Default::default()
    })
    .generate("auth", &scan_result.files, &mut sink)
    .unwrap();

    assert_eq!(
        sink.get("auth/logout.ts").unwrap(),
        "export const authDocumentationLogout: ApiDocumentationParams = {\n\
         isAuth: true,\n\
         params: [],\n\
         queries: [],\n\
         };\n"
    );
}

#[test]
fn test_directory_without_annotations_produces_nothing() {
    let temp_dir = create_test_project("plain", vec![("service.ts", "export class Service {}")]);

    let scan_result = FileScanner::new(temp_dir.path().join("src/plain")).scan().unwrap();
    let mut sink = FileSystemSink::new(temp_dir.path().join("documentation"));
    let report = DocumentationGenerator::new(GeneratorConfig::default())
        .generate("plain", &scan_result.files, &mut sink)
        .unwrap();

    assert!(report.generated.is_empty());
    assert!(report.index.is_none());
    assert!(!temp_dir.path().join("documentation").exists());
}
