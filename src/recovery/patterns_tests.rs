use super::*;

#[test]
fn class_head_matches_class_and_struct() {
    let patterns = Patterns::new();

    let head = patterns.class_head("class AngleSet : public Base").unwrap();
    assert_eq!(head.keyword, ClassKeyword::Class);
    assert_eq!(head.name, "AngleSet");

    let head = patterns.class_head("struct Point {").unwrap();
    assert_eq!(head.keyword, ClassKeyword::Struct);
    assert_eq!(head.name, "Point");
}

#[test]
fn class_head_skips_export_macro_and_template_prefix() {
    let patterns = Patterns::new();
    assert_eq!(
        patterns.class_head("class OPENSN_API Solver").unwrap().name,
        "Solver"
    );
    assert_eq!(
        patterns
            .class_head("template <typename T> class Box {")
            .unwrap()
            .name,
        "Box"
    );
}

#[test]
fn class_head_rejects_forward_declarations() {
    let patterns = Patterns::new();
    assert!(patterns.class_head("class MeshHandler;").is_none());
    assert!(patterns.class_head("friend class Bar;").is_none());
    assert!(patterns.class_head("enum class Mode { A };").is_none());
}

#[test]
fn access_specifier_keyword() {
    let patterns = Patterns::new();
    assert_eq!(patterns.access_specifier("public:"), Some("public"));
    assert_eq!(patterns.access_specifier("protected :"), Some("protected"));
    assert_eq!(patterns.access_specifier("private: int x_;"), Some("private"));
    assert_eq!(patterns.access_specifier("public_value_;"), None);
}

#[test]
fn template_header_is_whole_line() {
    let patterns = Patterns::new();
    assert!(patterns.is_template_header("template <typename T>"));
    assert!(patterns.is_template_header("template<class A, class B>"));
    assert!(!patterns.is_template_header("template <typename T> void Run(T t);"));
}

#[test]
fn variable_name_recognises_declarations() {
    let patterns = Patterns::new();
    let cases = [
        ("int x;", "x"),
        ("const size_t dimension_;", "dimension_"),
        ("std::vector<std::pair<int, int>> edges_;", "edges_"),
        ("static constexpr double kTolerance = 1e-8;", "kTolerance"),
        ("Cell* parent_ = nullptr;", "parent_"),
        ("const Mesh& mesh_;", "mesh_"),
        ("double weights_[3];", "weights_"),
        ("unsigned flags_ : 4;", "flags_"),
        ("int count_{0};", "count_"),
    ];
    for (code, expected) in cases {
        assert_eq!(
            patterns.variable_name(code).as_deref(),
            Some(expected),
            "{code}"
        );
    }
}

#[test]
fn variable_name_rejects_non_declarations() {
    let patterns = Patterns::new();
    for code in [
        "void Run();",
        "return value_;",
        "using Ptr = std::shared_ptr<Foo>;",
        "typedef int Id;",
        "friend class Bar;",
        "x_ = 3",
        "delete ptr_;",
    ] {
        assert!(patterns.variable_name(code).is_none(), "{code}");
    }
}

#[test]
fn signature_forms() {
    let patterns = Patterns::new();
    assert_eq!(
        patterns.signature_form("void Run();"),
        Some(SignatureForm::Declaration)
    );
    assert_eq!(
        patterns.signature_form("virtual void Run() {}"),
        Some(SignatureForm::Declaration)
    );
    assert_eq!(
        patterns.signature_form("void Run() = 0;"),
        Some(SignatureForm::Declaration)
    );
    assert_eq!(
        patterns.signature_form("void Run() const { Step(); }"),
        Some(SignatureForm::Definition)
    );
    assert_eq!(
        patterns.signature_form("void Run() const override"),
        Some(SignatureForm::Dangling)
    );
    assert_eq!(
        patterns.signature_form("auto Size() const -> size_t"),
        Some(SignatureForm::Dangling)
    );
    assert_eq!(patterns.signature_form("void Run(int a,"), None);
    assert_eq!(patterns.signature_form("int x_;"), None);
}

#[test]
fn trivial_accessor_shapes() {
    let patterns = Patterns::new();
    assert!(patterns.is_trivial_accessor("int Get() const { return value_; }"));
    assert!(patterns.is_trivial_accessor("int Get() const { return this->value; }"));
    assert!(patterns.is_trivial_accessor("int Get() const { return m_value; }"));
    assert!(patterns.is_trivial_accessor("void Set(int v) { value_ = v; }"));
    assert!(!patterns.is_trivial_accessor("int Get() const { return Compute(); }"));
    assert!(!patterns.is_trivial_accessor("void Set(int v) { value_ = v; Notify(); }"));
}

#[test]
fn strip_code_removes_comments_and_literals() {
    let mut in_block = false;
    assert_eq!(strip_code("int x_; // count", &mut in_block), "int x_;");
    assert_eq!(
        strip_code(r#"const char* name_ = "{;}";"#, &mut in_block),
        r#"const char* name_ = "";"#
    );
    assert_eq!(strip_code("char c_ = '}';", &mut in_block), "char c_ = '';");
    assert_eq!(strip_code("int /* inline */ y_;", &mut in_block), "int   y_;");
    assert!(!in_block);
}

#[test]
fn strip_code_carries_block_comment_state() {
    let mut in_block = false;
    assert_eq!(strip_code("int a_; /* start", &mut in_block), "int a_;");
    assert!(in_block);
    assert_eq!(strip_code("still { inside", &mut in_block), "");
    assert!(in_block);
    assert_eq!(strip_code("end */ int b_;", &mut in_block), "int b_;");
    assert!(!in_block);
}

#[test]
fn brace_and_paren_counting() {
    assert_eq!(brace_delta("class A {"), 1);
    assert_eq!(brace_delta("};"), -1);
    assert_eq!(brace_delta("void f() { g(); }"), 0);
    assert_eq!(paren_balance("Foo(int a,"), 1);
    assert_eq!(paren_balance("Foo(int a)"), 0);
}

#[test]
fn callable_name_variants() {
    assert_eq!(
        callable_name("void Run(int steps);"),
        Some(("Run".to_string(), 8))
    );
    assert_eq!(callable_name("~Foo();").unwrap().0, "~Foo");
    assert_eq!(callable_name("bool operator==(const A& o) const;").unwrap().0, "operator==");
    let (name, open) = callable_name("int operator()(int x) const;").unwrap();
    assert_eq!(name, "operator()");
    assert_eq!(&"int operator()(int x) const;"[open..open + 1], "(");
    assert_eq!(open, 14);
    assert!(callable_name("static_assert(sizeof(int) == 4);").is_none());
    assert!(callable_name("int x_;").is_none());
}

#[test]
fn parameter_splitting_respects_nesting() {
    assert_eq!(
        split_parameters("std::map<int, double> m, int n"),
        vec!["std::map<int, double> m", "int n"]
    );
    assert!(split_parameters("").is_empty());
    assert!(split_parameters("   ").is_empty());
}

#[test]
fn parameter_names_skip_unnamed_parameters() {
    assert_eq!(
        parameter_names("void Apply(const Mesh& mesh, int, double scale = 1.0);"),
        vec!["mesh".to_string(), "scale".to_string()]
    );
    assert_eq!(
        parameter_names("Foo(std::vector<int> values, size_t)"),
        vec!["values".to_string()]
    );
    assert!(parameter_names("void Run();").is_empty());
    assert!(parameter_names("int x_;").is_empty());
}

#[test]
fn copy_or_move_parameter_shapes() {
    assert!(is_copy_or_move_parameter("const Foo&", "Foo"));
    assert!(is_copy_or_move_parameter("const Foo &other", "Foo"));
    assert!(is_copy_or_move_parameter("Foo const& other", "Foo"));
    assert!(is_copy_or_move_parameter("Foo&& other", "Foo"));
    assert!(!is_copy_or_move_parameter("Foo& other", "Foo"));
    assert!(!is_copy_or_move_parameter("const Bar& other", "Foo"));
    assert!(!is_copy_or_move_parameter("const Foo* other", "Foo"));
}

#[test]
fn non_ascii_identifiers_use_byte_offsets() {
    let code = "void ééé(int größe, double ñ = 1.0);";
    let (name, open) = callable_name(code).unwrap();
    assert_eq!(name, "ééé");
    assert_eq!(&code[open..=open], "(");
    assert_eq!(
        parameter_names(code),
        vec!["größe".to_string(), "ñ".to_string()]
    );
}
