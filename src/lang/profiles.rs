//! The twelve built-in language profiles.
//!
//! Kind tables and parameter rules follow each grammar's node vocabulary;
//! the hooks at the bottom of this file cover the constructs no table can
//! express (receiver-qualified Go method names, C/C++ declarator descent,
//! parent-based naming of JavaScript lambdas, Kotlin scope-function calls,
//! Swift `init`/`deinit` synthesis, Python `self`/`cls` skipping).

use tree_sitter::{Language, Node};

use crate::lang::ast::{find_child_by_kind, node_text};
use crate::lang::profile::{LanguageProfile, NodeIncrement, SuggestionCatalog};

/// Every profile compiled into this build, in dispatch-table order.
pub static ALL_PROFILES: &[&LanguageProfile] = &[
    &GO, &JAVASCRIPT, &TYPESCRIPT, &PYTHON, &JAVA, &KOTLIN, &RUBY, &RUST, &SWIFT, &PHP, &CSHARP,
    &C_CPP,
];

// Grammar constructors. Kept as named functions so the profiles stay
// plain statics.

fn go_grammar(_ext: &str) -> Language {
    tree_sitter_go::LANGUAGE.into()
}

fn javascript_grammar(_ext: &str) -> Language {
    tree_sitter_javascript::LANGUAGE.into()
}

fn typescript_grammar(ext: &str) -> Language {
    if ext.eq_ignore_ascii_case("tsx") {
        tree_sitter_typescript::LANGUAGE_TSX.into()
    } else {
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
    }
}

fn python_grammar(_ext: &str) -> Language {
    tree_sitter_python::LANGUAGE.into()
}

fn java_grammar(_ext: &str) -> Language {
    tree_sitter_java::LANGUAGE.into()
}

fn kotlin_grammar(_ext: &str) -> Language {
    tree_sitter_kotlin_ng::LANGUAGE.into()
}

fn ruby_grammar(_ext: &str) -> Language {
    tree_sitter_ruby::LANGUAGE.into()
}

fn rust_grammar(_ext: &str) -> Language {
    tree_sitter_rust::LANGUAGE.into()
}

fn swift_grammar(_ext: &str) -> Language {
    tree_sitter_swift::LANGUAGE.into()
}

fn php_grammar(_ext: &str) -> Language {
    tree_sitter_php::LANGUAGE_PHP.into()
}

fn csharp_grammar(_ext: &str) -> Language {
    tree_sitter_c_sharp::LANGUAGE.into()
}

fn cpp_grammar(_ext: &str) -> Language {
    tree_sitter_cpp::LANGUAGE.into()
}

/// Go: top-level functions and receiver-qualified methods.
pub static GO: LanguageProfile = LanguageProfile {
    name: "Go",
    key: "go",
    extensions: &["go"],
    grammar: go_grammar,
    function_kinds: &["function_declaration", "method_declaration"],
    name_kinds: &["identifier", "field_identifier"],
    body_kinds: &["block"],
    branch_kinds: &[
        "if_statement",
        "for_statement",
        "expression_case",
        "default_case",
        "type_case",
        "communication_case",
    ],
    operator_tokens: &["&&", "||"],
    cognitive_kinds: &[
        "if_statement",
        "for_statement",
        "expression_switch_statement",
        "type_switch_statement",
        "select_statement",
    ],
    cognitive_penalties: &[],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "expression_switch_statement",
        "type_switch_statement",
        "select_statement",
    ],
    param_kinds: &[],
    param_threshold: 4,
    debt_tax: 0,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Functions",
        extract: "Break down this function into smaller, focused functions with clear names",
        nesting: "Use early returns or extract nested logic into helper functions",
        params_title: "Introduce Parameter Struct",
        params: "Too many parameters. Group related parameters into a struct or options value",
        too_long_title: "Function Too Long",
        too_long: "Split this function into smaller functions, each covering one step of the work",
        simplify: "Flatten error handling with early returns and keep the happy path unindented",
    },
    name_hook: Some(go_function_name),
    body_hook: None,
    param_hook: Some(go_parameter_count),
    increment_hook: None,
};

/// JavaScript and JSX.
pub static JAVASCRIPT: LanguageProfile = LanguageProfile {
    name: "JavaScript",
    key: "js",
    extensions: &["js", "jsx"],
    grammar: javascript_grammar,
    function_kinds: &[
        "function_declaration",
        "function_expression",
        "generator_function_declaration",
        "arrow_function",
        "method_definition",
    ],
    name_kinds: &["identifier", "property_identifier"],
    body_kinds: &["statement_block"],
    branch_kinds: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "for_of_statement",
        "while_statement",
        "do_statement",
        "switch_case",
        "switch_default",
        "catch_clause",
        "ternary_expression",
    ],
    operator_tokens: &["&&", "||", "??", "&&=", "||=", "??="],
    cognitive_kinds: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "for_of_statement",
        "while_statement",
        "do_statement",
        "switch_case",
        "catch_clause",
    ],
    cognitive_penalties: &[("ternary_expression", 1)],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "for_of_statement",
        "while_statement",
        "do_statement",
        "switch_statement",
        "catch_clause",
    ],
    param_kinds: &[
        "identifier",
        "assignment_pattern",
        "rest_parameter",
        "rest_pattern",
        "object_pattern",
        "array_pattern",
    ],
    param_threshold: 4,
    debt_tax: 0,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Functions",
        extract: "Break down this function into smaller, focused functions or modules",
        nesting: "Use early returns, optional chaining (?.), or extracted callbacks to reduce nesting",
        params_title: "Introduce Options Object",
        params: "Too many parameters. Pass an options object with named properties instead",
        too_long_title: "Function Too Long",
        too_long: "Split this function into smaller functions or extract reusable helpers",
        simplify: "Use array methods (map, filter, reduce), async/await, or early returns to simplify logic",
    },
    name_hook: Some(js_function_name),
    body_hook: None,
    param_hook: Some(js_parameter_count),
    increment_hook: None,
};

/// TypeScript and TSX: JavaScript rules plus typed-parameter variants.
pub static TYPESCRIPT: LanguageProfile = LanguageProfile {
    name: "TypeScript",
    key: "ts",
    extensions: &["ts", "tsx"],
    grammar: typescript_grammar,
    function_kinds: &[
        "function_declaration",
        "function_expression",
        "generator_function_declaration",
        "arrow_function",
        "method_definition",
    ],
    name_kinds: &["identifier", "property_identifier"],
    body_kinds: &["statement_block"],
    branch_kinds: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "for_of_statement",
        "while_statement",
        "do_statement",
        "switch_case",
        "switch_default",
        "catch_clause",
        "ternary_expression",
    ],
    operator_tokens: &["&&", "||", "??", "&&=", "||=", "??="],
    cognitive_kinds: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "for_of_statement",
        "while_statement",
        "do_statement",
        "switch_case",
        "catch_clause",
    ],
    cognitive_penalties: &[("ternary_expression", 1)],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "for_of_statement",
        "while_statement",
        "do_statement",
        "switch_statement",
        "catch_clause",
    ],
    param_kinds: &["required_parameter", "optional_parameter", "rest_parameter"],
    param_threshold: 4,
    debt_tax: 0,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Functions",
        extract: "Break down this function into smaller, typed functions with narrow interfaces",
        nesting: "Use early returns, optional chaining (?.), or type guards to reduce nesting",
        params_title: "Introduce Options Interface",
        params: "Too many parameters. Define an options interface and pass a single object",
        too_long_title: "Function Too Long",
        too_long: "Split this function into smaller functions or extract reusable helpers",
        simplify: "Use discriminated unions, array methods, or early returns to simplify logic",
    },
    name_hook: Some(js_function_name),
    body_hook: None,
    param_hook: Some(js_parameter_count),
    increment_hook: None,
};

/// Python: every `def`, nested and class-scoped alike.
pub static PYTHON: LanguageProfile = LanguageProfile {
    name: "Python",
    key: "py",
    extensions: &["py"],
    grammar: python_grammar,
    function_kinds: &["function_definition"],
    name_kinds: &["identifier"],
    body_kinds: &["block"],
    branch_kinds: &[
        "if_statement",
        "elif_clause",
        "for_statement",
        "while_statement",
        "case_clause",
        "except_clause",
        "conditional_expression",
    ],
    operator_tokens: &["and", "or"],
    cognitive_kinds: &[
        "if_statement",
        "elif_clause",
        "for_statement",
        "while_statement",
        "try_statement",
        "match_statement",
    ],
    cognitive_penalties: &[],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "while_statement",
        "try_statement",
        "match_statement",
    ],
    param_kinds: &[],
    param_threshold: 4,
    debt_tax: 0,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Functions",
        extract: "Break down this function into smaller, focused functions",
        nesting: "Use guard clauses, early returns, or extracted helpers to reduce nesting",
        params_title: "Introduce Parameter Object",
        params: "Too many parameters. Use a dataclass or keyword-only arguments with defaults",
        too_long_title: "Function Too Long",
        too_long: "Split this function into smaller functions or move logic into methods",
        simplify: "Use comprehensions, itertools, or early returns to simplify logic",
    },
    name_hook: None,
    body_hook: None,
    param_hook: Some(python_parameter_count),
    increment_hook: None,
};

/// Java: methods, constructors, and record compact constructors.
pub static JAVA: LanguageProfile = LanguageProfile {
    name: "Java",
    key: "java",
    extensions: &["java"],
    grammar: java_grammar,
    function_kinds: &[
        "method_declaration",
        "constructor_declaration",
        "compact_constructor_declaration",
    ],
    name_kinds: &["identifier"],
    body_kinds: &["block", "constructor_body"],
    branch_kinds: &[
        "if_statement",
        "for_statement",
        "enhanced_for_statement",
        "while_statement",
        "do_statement",
        "catch_clause",
        "ternary_expression",
        "switch_label",
        "switch_rule",
    ],
    operator_tokens: &["&&", "||"],
    cognitive_kinds: &[
        "if_statement",
        "for_statement",
        "enhanced_for_statement",
        "while_statement",
        "do_statement",
        "switch_expression",
        "try_statement",
    ],
    cognitive_penalties: &[],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "enhanced_for_statement",
        "while_statement",
        "do_statement",
        "switch_expression",
        "try_statement",
    ],
    param_kinds: &["formal_parameter", "spread_parameter"],
    param_threshold: 4,
    debt_tax: 0,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Methods",
        extract: "Break down this method into smaller, focused methods",
        nesting: "Use guard clauses, early returns, or extracted private methods to reduce nesting",
        params_title: "Introduce Parameter Object",
        params: "Too many parameters. Group related parameters into a value object or builder",
        too_long_title: "Method Too Long",
        too_long: "Split this method into smaller methods, each with a single responsibility",
        simplify: "Use streams, polymorphism, or early returns to simplify conditional logic",
    },
    name_hook: None,
    body_hook: None,
    param_hook: None,
    increment_hook: None,
};

/// Kotlin: `fun` declarations, including expression bodies.
pub static KOTLIN: LanguageProfile = LanguageProfile {
    name: "Kotlin",
    key: "kt",
    extensions: &["kt", "kts"],
    grammar: kotlin_grammar,
    function_kinds: &["function_declaration"],
    name_kinds: &["simple_identifier"],
    body_kinds: &["function_body"],
    branch_kinds: &[
        "if_expression",
        "for_statement",
        "while_statement",
        "do_while_statement",
        "when_expression",
        "when_entry",
        "catch_block",
        "elvis_expression",
        "lambda_literal",
    ],
    operator_tokens: &["&&", "||", "?."],
    cognitive_kinds: &[
        "if_expression",
        "when_expression",
        "while_statement",
        "for_statement",
        "do_while_statement",
        "catch_block",
    ],
    cognitive_penalties: &[],
    nesting_kinds: &[
        "if_expression",
        "for_statement",
        "while_statement",
        "do_while_statement",
        "when_expression",
        "catch_block",
    ],
    param_kinds: &["parameter", "class_parameter"],
    param_threshold: 4,
    debt_tax: 0,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Functions",
        extract: "Break down this function into smaller, focused functions. Consider using extension functions or sealed classes",
        nesting: "Use Kotlin's safe call operators (?.), let, also, or early returns to reduce nesting",
        params_title: "Use Data Class or Builder Pattern",
        params: "Too many parameters. Consider using a data class with named parameters or default values",
        too_long_title: "Function Too Long",
        too_long: "Split this function into smaller functions. Consider using extension functions or separating concerns",
        simplify: "Use Kotlin's scope functions (let, run, apply), when expressions, or sealed classes to simplify logic",
    },
    name_hook: None,
    body_hook: None,
    param_hook: None,
    increment_hook: Some(kotlin_increments),
};

/// Ruby: instance and singleton methods.
pub static RUBY: LanguageProfile = LanguageProfile {
    name: "Ruby",
    key: "rb",
    extensions: &["rb"],
    grammar: ruby_grammar,
    function_kinds: &["method", "singleton_method"],
    name_kinds: &["identifier"],
    body_kinds: &["body_statement"],
    branch_kinds: &[
        "if",
        "elsif",
        "unless",
        "if_modifier",
        "unless_modifier",
        "while",
        "until",
        "while_modifier",
        "until_modifier",
        "for",
        "when",
        "rescue",
        "conditional",
        "block",
        "do_block",
    ],
    operator_tokens: &["&&", "||", "and", "or"],
    cognitive_kinds: &["if", "unless", "case", "while", "until", "for", "rescue"],
    cognitive_penalties: &[],
    nesting_kinds: &[
        "if", "unless", "case", "while", "until", "for", "rescue", "begin",
    ],
    param_kinds: &[
        "identifier",
        "optional_parameter",
        "keyword_parameter",
        "splat_parameter",
        "hash_splat_parameter",
        "block_parameter",
        "destructured_parameter",
    ],
    param_threshold: 4,
    debt_tax: 0,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Methods",
        extract: "Break down this method into smaller, focused methods using Ruby's expressive syntax",
        nesting: "Use Ruby's guard clauses, early returns, or extract nested logic into separate methods",
        params_title: "Introduce Parameter Object",
        params: "Consider using a hash or creating a parameter object to group related parameters",
        too_long_title: "Method Too Long",
        too_long: "Split this method into smaller methods. Consider using Ruby modules or service objects",
        simplify: "Use Ruby idioms like safe navigation (&.), try, or early returns to simplify logic",
    },
    name_hook: None,
    body_hook: Some(whole_node_body),
    param_hook: None,
    increment_hook: None,
};

/// Rust: free functions, methods, and associated functions.
pub static RUST: LanguageProfile = LanguageProfile {
    name: "Rust",
    key: "rs",
    extensions: &["rs"],
    grammar: rust_grammar,
    function_kinds: &["function_item"],
    name_kinds: &["identifier"],
    body_kinds: &["block"],
    branch_kinds: &[
        "if_expression",
        "match_expression",
        "match_arm",
        "while_expression",
        "for_expression",
        "loop_expression",
        "try_expression",
        "or_pattern",
    ],
    operator_tokens: &["&&", "||"],
    cognitive_kinds: &[
        "if_expression",
        "match_expression",
        "while_expression",
        "for_expression",
        "loop_expression",
    ],
    cognitive_penalties: &[("unsafe_block", 3)],
    nesting_kinds: &[
        "if_expression",
        "match_expression",
        "while_expression",
        "for_expression",
        "loop_expression",
    ],
    param_kinds: &["parameter"],
    param_threshold: 4,
    debt_tax: 2,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Functions",
        extract: "Break down this function into smaller, focused functions. Consider using private helper functions or modules",
        nesting: "Use early returns with ? operator, if let, or match guards to reduce nesting",
        params_title: "Consider Builder Pattern or Struct",
        params: "Too many parameters. Consider using a builder pattern or passing a configuration struct",
        too_long_title: "Function Too Long",
        too_long: "Split this function into smaller functions. Consider extracting logic into separate modules or traits",
        simplify: "Use Rust's Result and Option combinators (map, and_then, unwrap_or) to simplify control flow",
    },
    name_hook: None,
    body_hook: None,
    param_hook: None,
    increment_hook: Some(rust_increments),
};

/// Swift: functions plus `init` and `deinit` declarations.
pub static SWIFT: LanguageProfile = LanguageProfile {
    name: "Swift",
    key: "swift",
    extensions: &["swift"],
    grammar: swift_grammar,
    function_kinds: &[
        "function_declaration",
        "init_declaration",
        "deinit_declaration",
    ],
    name_kinds: &["simple_identifier"],
    body_kinds: &["function_body"],
    branch_kinds: &[
        "if_statement",
        "guard_statement",
        "for_statement",
        "while_statement",
        "repeat_while_statement",
        "switch_entry",
        "catch_block",
        "catch_clause",
        "ternary_expression",
        "nil_coalescing_expression",
    ],
    operator_tokens: &["&&", "||", "??"],
    cognitive_kinds: &[
        "if_statement",
        "guard_statement",
        "switch_statement",
        "while_statement",
        "for_statement",
        "repeat_while_statement",
        "do_statement",
    ],
    cognitive_penalties: &[("lambda_literal", 2), ("await_expression", 2)],
    nesting_kinds: &[
        "if_statement",
        "guard_statement",
        "switch_statement",
        "while_statement",
        "for_statement",
        "repeat_while_statement",
        "catch_block",
        "catch_clause",
    ],
    param_kinds: &[],
    param_threshold: 4,
    debt_tax: 0,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Methods",
        extract: "Break down this function into smaller, focused methods. Consider using extension methods or protocols",
        nesting: "Use guard statements, optional chaining (?.), or early returns to reduce nesting",
        params_title: "Use Struct or Builder Pattern",
        params: "Too many parameters. Consider using a struct with default values or a builder pattern",
        too_long_title: "Function Too Long",
        too_long: "Split this function into smaller methods. Consider extracting logic into extensions or separate types",
        simplify: "Use Swift's Result type, optional chaining, guard statements, or functional methods (map, flatMap) to simplify logic",
    },
    name_hook: Some(swift_function_name),
    body_hook: None,
    param_hook: Some(swift_parameter_count),
    increment_hook: Some(swift_increments),
};

/// PHP: free functions and class methods.
pub static PHP: LanguageProfile = LanguageProfile {
    name: "PHP",
    key: "php",
    extensions: &["php"],
    grammar: php_grammar,
    function_kinds: &["function_definition", "method_declaration"],
    name_kinds: &["name"],
    body_kinds: &["compound_statement"],
    branch_kinds: &[
        "if_statement",
        "else_if_clause",
        "while_statement",
        "do_statement",
        "for_statement",
        "foreach_statement",
        "switch_statement",
        "case_statement",
        "default_statement",
        "catch_clause",
        "conditional_expression",
    ],
    operator_tokens: &["&&", "||", "and", "or", "xor", "??"],
    cognitive_kinds: &[
        "if_statement",
        "while_statement",
        "for_statement",
        "foreach_statement",
        "switch_statement",
        "do_statement",
        "try_statement",
    ],
    cognitive_penalties: &[],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "foreach_statement",
        "while_statement",
        "do_statement",
        "switch_statement",
        "try_statement",
    ],
    param_kinds: &[
        "simple_parameter",
        "variadic_parameter",
        "property_promotion_parameter",
    ],
    param_threshold: 4,
    debt_tax: 0,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Methods",
        extract: "Break down this function into smaller, focused methods or invokable classes",
        nesting: "Use guard clauses, early returns, or extracted private methods to reduce nesting",
        params_title: "Introduce Parameter Object",
        params: "Too many parameters. Group related parameters into a value object or DTO",
        too_long_title: "Function Too Long",
        too_long: "Split this function into smaller methods, each with a single responsibility",
        simplify: "Use null coalescing (??), match expressions, or early returns to simplify logic",
    },
    name_hook: None,
    body_hook: None,
    param_hook: None,
    increment_hook: None,
};

/// C#: methods, local functions, and constructors.
pub static CSHARP: LanguageProfile = LanguageProfile {
    name: "C#",
    key: "cs",
    extensions: &["cs"],
    grammar: csharp_grammar,
    function_kinds: &[
        "method_declaration",
        "local_function_statement",
        "constructor_declaration",
    ],
    name_kinds: &["identifier"],
    body_kinds: &["block", "arrow_expression_clause"],
    branch_kinds: &[
        "if_statement",
        "for_statement",
        "foreach_statement",
        "while_statement",
        "do_statement",
        "catch_clause",
        "conditional_expression",
        "case_switch_label",
        "switch_expression_arm",
    ],
    operator_tokens: &["&&", "||", "??", "??="],
    cognitive_kinds: &[
        "if_statement",
        "while_statement",
        "for_statement",
        "foreach_statement",
        "switch_statement",
        "do_statement",
        "try_statement",
    ],
    cognitive_penalties: &[],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "foreach_statement",
        "while_statement",
        "do_statement",
        "switch_statement",
        "try_statement",
    ],
    param_kinds: &["parameter"],
    param_threshold: 4,
    debt_tax: 2,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Methods",
        extract: "Break down this method into smaller, focused methods",
        nesting: "Use guard clauses, pattern matching, or early returns to reduce nesting",
        params_title: "Introduce Parameter Object",
        params: "Too many parameters. Group related parameters into a record or options class",
        too_long_title: "Method Too Long",
        too_long: "Split this method into smaller methods, each with a single responsibility",
        simplify: "Use LINQ, switch expressions, or null-coalescing operators to simplify logic",
    },
    name_hook: None,
    body_hook: None,
    param_hook: None,
    increment_hook: None,
};

/// C and C++: function definitions, methods, constructors, destructors,
/// operators, and template bodies.
pub static C_CPP: LanguageProfile = LanguageProfile {
    name: "C/C++",
    key: "cpp",
    extensions: &[
        "c", "cpp", "cc", "cxx", "c++", "h", "hpp", "hxx", "h++",
    ],
    grammar: cpp_grammar,
    function_kinds: &["function_definition"],
    name_kinds: &["identifier", "field_identifier"],
    body_kinds: &["compound_statement"],
    branch_kinds: &[
        "if_statement",
        "while_statement",
        "for_statement",
        "for_range_loop",
        "do_statement",
        "case_statement",
        "catch_clause",
        "conditional_expression",
        "goto_statement",
    ],
    operator_tokens: &["&&", "||"],
    cognitive_kinds: &[
        "if_statement",
        "while_statement",
        "for_statement",
        "for_range_loop",
        "switch_statement",
        "do_statement",
        "try_statement",
    ],
    cognitive_penalties: &[("goto_statement", 4)],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "for_range_loop",
        "while_statement",
        "do_statement",
        "switch_statement",
        "try_statement",
    ],
    param_kinds: &[],
    param_threshold: 5,
    debt_tax: 3,
    has_cognitive: true,
    suggestions: SuggestionCatalog {
        extract_title: "Extract Functions",
        extract: "Break down this function into smaller, focused functions. Consider using inline functions for performance-critical paths",
        nesting: "Use early returns, guard clauses, or extract nested logic into helper functions",
        params_title: "Too Many Parameters",
        params: "Consider using a struct/class to group related parameters or use parameter objects",
        too_long_title: "Function Too Long",
        too_long: "Split this function into smaller functions. Consider separating algorithm from data structure manipulation",
        simplify: "Simplify control flow, reduce pointer complexity, or use RAII patterns to improve readability",
    },
    name_hook: Some(cpp_function_name),
    body_hook: None,
    param_hook: Some(cpp_parameter_count),
    increment_hook: None,
};

// ---------------------------------------------------------------------------
// Hooks
// ---------------------------------------------------------------------------

/// Body fallback for languages whose metrics walk the whole function node.
fn whole_node_body(node: Node) -> Option<Node> {
    Some(node)
}

/// Go: methods get a receiver-qualified name like `(*Server).Handle`.
fn go_function_name(node: Node, source: &str) -> Option<String> {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())?;

    if node.kind() != "method_declaration" {
        return Some(name);
    }

    let receiver_type = node
        .child_by_field_name("receiver")
        .and_then(|recv| find_child_by_kind(recv, "parameter_declaration"))
        .and_then(|decl| decl.child_by_field_name("type"))
        .map(|ty| node_text(ty, source).to_string());

    match receiver_type {
        Some(ty) => Some(format!("({ty}).{name}")),
        None => Some(name),
    }
}

/// Go counts every name bound in a parameter field: `a, b int` is two.
fn go_parameter_count(node: Node, _source: &str) -> u32 {
    let Some(params) = node.child_by_field_name("parameters") else {
        return 0;
    };

    let mut count = 0u32;
    let mut cursor = params.walk();
    for decl in params.children(&mut cursor) {
        match decl.kind() {
            "parameter_declaration" | "variadic_parameter_declaration" => {
                let mut inner = decl.walk();
                let names = decl
                    .children(&mut inner)
                    .filter(|c| c.kind() == "identifier")
                    .count() as u32;
                // An unnamed parameter (`func f(int)`) still counts once
                count += names.max(1);
            }
            _ => {}
        }
    }
    count
}

/// JavaScript/TypeScript: named nodes use their `name` field; lambdas
/// borrow a name from the surrounding declarator, object key, or
/// assignment target. Functions with no derivable name are skipped.
fn js_function_name(node: Node, source: &str) -> Option<String> {
    if let Some(name) = node.child_by_field_name("name") {
        return Some(node_text(name, source).to_string());
    }

    let parent = node.parent()?;
    match parent.kind() {
        "variable_declarator" => parent
            .child_by_field_name("name")
            .map(|n| node_text(n, source).to_string()),
        "pair" => parent
            .child_by_field_name("key")
            .map(|n| node_text(n, source).to_string()),
        "assignment_expression" => {
            let left = parent.child_by_field_name("left")?;
            if left.kind() == "member_expression" {
                left.child_by_field_name("property")
                    .map(|n| node_text(n, source).to_string())
            } else {
                Some(node_text(left, source).to_string())
            }
        }
        _ => None,
    }
}

// The two grammars name their parameter children disjointly, so one
// combined kind list serves both dialects.
const JS_TS_PARAM_KINDS: &[&str] = &[
    "identifier",
    "assignment_pattern",
    "rest_parameter",
    "rest_pattern",
    "object_pattern",
    "array_pattern",
    "required_parameter",
    "optional_parameter",
];

/// JavaScript/TypeScript parameter counting, including the paren-free
/// arrow form where a lone identifier is one parameter.
fn js_parameter_count(node: Node, _source: &str) -> u32 {
    if let Some(params) = node.child_by_field_name("parameters") {
        let mut count = 0u32;
        let mut cursor = params.walk();
        for child in params.children(&mut cursor) {
            if JS_TS_PARAM_KINDS.contains(&child.kind()) {
                count += 1;
            }
        }
        return count;
    }

    // `x => x + 1`: the single parameter sits in the `parameter` field
    match node.child_by_field_name("parameter") {
        Some(p) if p.kind() == "identifier" => 1,
        _ => 0,
    }
}

/// Python drops `self` and `cls` from the count.
fn python_parameter_count(node: Node, source: &str) -> u32 {
    let Some(params) = node.child_by_field_name("parameters") else {
        return 0;
    };

    let mut count = 0u32;
    let mut cursor = params.walk();
    for child in params.children(&mut cursor) {
        match child.kind() {
            "identifier" => {
                if !is_self_or_cls(node_text(child, source)) {
                    count += 1;
                }
            }
            "typed_parameter" | "default_parameter" | "typed_default_parameter" => {
                let inner = find_child_by_kind(child, "identifier")
                    .map(|n| node_text(n, source))
                    .unwrap_or("");
                if !is_self_or_cls(inner) {
                    count += 1;
                }
            }
            "list_splat_pattern" | "dictionary_splat_pattern" => count += 1,
            _ => {}
        }
    }
    count
}

fn is_self_or_cls(name: &str) -> bool {
    name == "self" || name == "cls"
}

/// Kotlin scope-function calls (`.let`, `.run`, `.apply`, `.also`)
/// introduce a hidden branch: one cyclomatic and one cognitive point.
fn kotlin_increments(node: Node, source: &str) -> NodeIncrement {
    if node.kind() != "call_expression" {
        return (0, 0);
    }

    let callee = node
        .child(0)
        .filter(|c| c.kind() == "navigation_expression")
        .and_then(|nav| find_child_by_kind(nav, "navigation_suffix"))
        .and_then(|suffix| find_child_by_kind(suffix, "simple_identifier"))
        .map(|ident| node_text(ident, source));

    match callee {
        Some("let" | "run" | "apply" | "also") => (1, 1),
        _ => (0, 0),
    }
}

/// Rust combinators hide a branch behind a closure argument.
fn rust_increments(node: Node, source: &str) -> NodeIncrement {
    if node.kind() != "call_expression" {
        return (0, 0);
    }

    let method = node
        .child_by_field_name("function")
        .filter(|f| f.kind() == "field_expression")
        .and_then(|f| f.child_by_field_name("field"))
        .map(|ident| node_text(ident, source));

    match method {
        Some("unwrap_or" | "and_then" | "or_else" | "map" | "filter") => (1, 0),
        _ => (0, 0),
    }
}

/// Swift `init`/`deinit` declarations have no name node to read.
fn swift_function_name(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "init_declaration" => Some("init".to_string()),
        "deinit_declaration" => Some("deinit".to_string()),
        _ => node
            .child_by_field_name("name")
            .or_else(|| find_child_by_kind(node, "simple_identifier"))
            .map(|n| node_text(n, source).to_string()),
    }
}

/// Swift parameters can sit directly on the declaration or inside a
/// parameter clause / signature wrapper, depending on the construct.
fn swift_parameter_count(node: Node, _source: &str) -> u32 {
    let mut count = 0u32;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let kind = child.kind();
        if kind == "parameter" {
            count += 1;
        } else if kind.contains("parameter_clause") || kind.contains("signature") {
            let mut inner = child.walk();
            count += child
                .children(&mut inner)
                .filter(|c| c.kind() == "parameter")
                .count() as u32;
        }
    }
    count
}

/// Swift `try?` converts a thrown error into an optional: hidden branch.
fn swift_increments(node: Node, source: &str) -> NodeIncrement {
    if node.kind() == "try_expression" && node_text(node, source).starts_with("try?") {
        (1, 0)
    } else {
        (0, 0)
    }
}

/// C/C++ function names live at the bottom of a declarator chain:
/// plain identifiers, class methods, destructors, operators, and
/// namespace-qualified definitions all nest differently.
fn cpp_function_name(node: Node, source: &str) -> Option<String> {
    let mut current = node.child_by_field_name("declarator")?;

    loop {
        match current.kind() {
            "identifier" | "field_identifier" | "destructor_name" | "operator_name"
            | "qualified_identifier" => {
                return Some(node_text(current, source).to_string());
            }
            _ => {}
        }

        if let Some(inner) = current.child_by_field_name("declarator") {
            current = inner;
            continue;
        }

        let mut cursor = current.walk();
        let next = current.children(&mut cursor).find(|c| {
            c.kind().contains("declarator")
                || c.kind() == "identifier"
                || c.kind() == "qualified_identifier"
        });
        match next {
            Some(n) => current = n,
            None => return Some("unknown_function".to_string()),
        }
    }
}

/// C/C++ counts `parameter_declaration` nodes; a lone `void` is zero.
fn cpp_parameter_count(node: Node, source: &str) -> u32 {
    let Some(declarator) = node.child_by_field_name("declarator") else {
        return 0;
    };

    let mut decls: Vec<Node> = Vec::new();
    crate::lang::ast::walk(declarator, &mut |n| {
        if n.kind() == "parameter_declaration" {
            decls.push(n);
        }
    });

    if decls.len() == 1 && node_text(decls[0], source).trim() == "void" {
        return 0;
    }
    decls.len() as u32
}

#[cfg(test)]
#[path = "profiles_tests.rs"]
mod tests;
