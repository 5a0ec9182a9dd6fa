//! Inline CSV scenarios with known comparison results.

/// Test case structure containing base/live CSV and expected results
pub struct TestCase {
    pub name: &'static str,
    #[allow(dead_code)]
    pub description: &'static str,
    pub base_csv: &'static str,
    pub live_csv: &'static str,
    pub options: TestOptions,
    pub expected: ExpectedResult,
}

pub struct TestOptions {
    pub primary_key: &'static str,
    pub ignore_case: bool,
    pub has_headers: bool,
}

pub struct ExpectedResult {
    pub new_count: usize,
    pub updated_count: usize,
    pub removed_count: usize,
    pub unchanged_count: usize,
    /// (key, changed columns) for each UPDATED row
    pub updated: &'static [(&'static str, &'static [&'static str])],
    pub should_error: bool,
    pub error_message: Option<&'static str>,
}

const DEFAULT_OPTIONS: TestOptions = TestOptions {
    primary_key: "id",
    ignore_case: true,
    has_headers: true,
};

pub mod basic {
    use super::*;

    pub const MIXED_CHANGES: TestCase = TestCase {
        name: "mixed_changes",
        description: "One unchanged, one removed, one new row",
        base_csv: "id,name\n1,A\n2,B",
        live_csv: "id,name\n1,A\n3,C",
        options: DEFAULT_OPTIONS,
        expected: ExpectedResult {
            new_count: 1,
            updated_count: 0,
            removed_count: 1,
            unchanged_count: 1,
            updated: &[],
            should_error: false,
            error_message: None,
        },
    };

    pub const SINGLE_UPDATE: TestCase = TestCase {
        name: "single_update",
        description: "One cell changed",
        base_csv: "id,v\n1,x",
        live_csv: "id,v\n1,y",
        options: DEFAULT_OPTIONS,
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 1,
            removed_count: 0,
            unchanged_count: 0,
            updated: &[("1", &["v"])],
            should_error: false,
            error_message: None,
        },
    };

    pub const MULTIPLE_COLUMNS: TestCase = TestCase {
        name: "multiple_columns",
        description: "Several columns changed on several rows",
        base_csv: "id,name,age,city\n1,Alice,30,NYC\n2,Bob,25,LA\n3,Charlie,35,Chicago",
        live_csv: "id,name,age,city\n1,Alice,31,NYC\n2,Robert,25,San Francisco\n3,Charlie,35,Chicago",
        options: DEFAULT_OPTIONS,
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 2,
            removed_count: 0,
            unchanged_count: 1,
            updated: &[("1", &["age"]), ("2", &["name", "city"])],
            should_error: false,
            error_message: None,
        },
    };
}

pub mod keys {
    use super::*;

    pub const BLANK_KEYS_EXCLUDED: TestCase = TestCase {
        name: "blank_keys_excluded",
        description: "Rows with an empty key never match and never appear",
        base_csv: "id,v\n,a\n1,b",
        live_csv: "id,v\n,a\n1,b\n,c",
        options: DEFAULT_OPTIONS,
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 0,
            removed_count: 0,
            unchanged_count: 1,
            updated: &[],
            should_error: false,
            error_message: None,
        },
    };

    pub const DUPLICATE_BASE_KEY: TestCase = TestCase {
        name: "duplicate_base_key",
        description: "The later base row shadows the earlier one",
        base_csv: "id,v\n1,old\n1,new",
        live_csv: "id,v\n1,new",
        options: DEFAULT_OPTIONS,
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 0,
            removed_count: 0,
            unchanged_count: 1,
            updated: &[],
            should_error: false,
            error_message: None,
        },
    };

    pub const DUPLICATE_LIVE_KEY: TestCase = TestCase {
        name: "duplicate_live_key",
        description: "The later live row shadows the earlier one",
        base_csv: "id,v\n1,a",
        live_csv: "id,v\n1,a\n1,b",
        options: DEFAULT_OPTIONS,
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 1,
            removed_count: 0,
            unchanged_count: 0,
            updated: &[("1", &["v"])],
            should_error: false,
            error_message: None,
        },
    };

    pub const KEY_CASE_SENSITIVE: TestCase = TestCase {
        name: "key_case_sensitive",
        description: "Keys match exactly even when values are case-folded",
        base_csv: "id,v\nabc,1",
        live_csv: "id,v\nABC,1",
        options: DEFAULT_OPTIONS,
        expected: ExpectedResult {
            new_count: 1,
            updated_count: 0,
            removed_count: 1,
            unchanged_count: 0,
            updated: &[],
            should_error: false,
            error_message: None,
        },
    };

    pub const MISSING_KEY_COLUMN: TestCase = TestCase {
        name: "missing_key_column",
        description: "Key column not declared by the live dataset",
        base_csv: "id,v\n1,a",
        live_csv: "code,v\n1,a",
        options: DEFAULT_OPTIONS,
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 0,
            removed_count: 0,
            unchanged_count: 0,
            updated: &[],
            should_error: true,
            error_message: Some("not found in live dataset"),
        },
    };

    pub const EMPTY_KEY_NAME: TestCase = TestCase {
        name: "empty_key_name",
        description: "No primary key selected",
        base_csv: "id,v\n1,a",
        live_csv: "id,v\n1,a",
        options: TestOptions {
            primary_key: "",
            ignore_case: true,
            has_headers: true,
        },
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 0,
            removed_count: 0,
            unchanged_count: 0,
            updated: &[],
            should_error: true,
            error_message: Some("No primary key selected"),
        },
    };
}

pub mod normalization {
    use super::*;

    pub const CASE_FOLDED: TestCase = TestCase {
        name: "case_folded",
        description: "Case differences are ignored when ignore_case is set",
        base_csv: "id,name\n1,ABC",
        live_csv: "id,name\n1,abc",
        options: DEFAULT_OPTIONS,
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 0,
            removed_count: 0,
            unchanged_count: 1,
            updated: &[],
            should_error: false,
            error_message: None,
        },
    };

    pub const CASE_EXACT: TestCase = TestCase {
        name: "case_exact",
        description: "Case differences are changes when ignore_case is off",
        base_csv: "id,name\n1,ABC",
        live_csv: "id,name\n1,abc",
        options: TestOptions {
            primary_key: "id",
            ignore_case: false,
            has_headers: true,
        },
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 1,
            removed_count: 0,
            unchanged_count: 0,
            updated: &[("1", &["name"])],
            should_error: false,
            error_message: None,
        },
    };

    pub const NUMBER_FORMATTING: TestCase = TestCase {
        name: "number_formatting",
        description: "Numeric formatting differences are reported",
        base_csv: "id,price\n1,42.0\n2,7",
        live_csv: "id,price\n1,42\n2,7",
        options: DEFAULT_OPTIONS,
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 1,
            removed_count: 0,
            unchanged_count: 1,
            updated: &[("1", &["price"])],
            should_error: false,
            error_message: None,
        },
    };

    pub const SCHEMA_DRIFT: TestCase = TestCase {
        name: "schema_drift",
        description: "A column added in live is compared against empty base cells",
        base_csv: "id,name\n1,A\n2,B",
        live_csv: "id,name,email\n1,A,\n2,B,b@example.com",
        options: DEFAULT_OPTIONS,
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 1,
            removed_count: 0,
            unchanged_count: 1,
            updated: &[("2", &["email"])],
            should_error: false,
            error_message: None,
        },
    };

    pub const NO_HEADERS: TestCase = TestCase {
        name: "no_headers",
        description: "Generated column names used as the key",
        base_csv: "1,Alice\n2,Bob",
        live_csv: "1,Alice\n2,Bobby",
        options: TestOptions {
            primary_key: "Column1",
            ignore_case: true,
            has_headers: false,
        },
        expected: ExpectedResult {
            new_count: 0,
            updated_count: 1,
            removed_count: 0,
            unchanged_count: 1,
            updated: &[("2", &["Column2"])],
            should_error: false,
            error_message: None,
        },
    };
}
