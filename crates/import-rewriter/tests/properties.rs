//! Property tests for ascent collapsing and import rewriting.

use proptest::prelude::*;

use import_rewriter::{
    collapse_ascent, leading_ascents, normalize_imports, rewrite_references, SourceKind,
};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,8}").unwrap()
}

fn relative_suffix() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Collapsing removes exactly one ascent and keeps the suffix.
    #[test]
    fn property_collapse_removes_one_level(ascents in 1usize..6, suffix in relative_suffix()) {
        let path = format!("{}{}", "../".repeat(ascents), suffix);
        let collapsed = collapse_ascent(&path).expect("path has a leading ascent");

        let rerooted = collapsed.strip_prefix("./").expect("collapsed path is rooted at ./");
        prop_assert_eq!(leading_ascents(rerooted), ascents - 1);
        prop_assert!(collapsed.ends_with(&suffix));
        prop_assert_eq!(&rerooted[(ascents - 1) * 3..], suffix.as_str());
    }

    /// PROPERTY: Paths without a leading ascent are never touched.
    #[test]
    fn property_no_ascent_no_change(prefix in "(\\./)?", suffix in relative_suffix()) {
        let path = format!("{prefix}{suffix}");
        prop_assert_eq!(collapse_ascent(&path), None);
    }

    /// PROPERTY: Normalizing a script only alters the path inside the quotes.
    #[test]
    fn property_script_statement_shape(ascents in 0usize..4, suffix in relative_suffix()) {
        let path = format!("{}{}.js", "../".repeat(ascents), suffix);
        let script = format!("import {{ x }} from '{path}';\nconsole.log(x);\n");
        let output = normalize_imports(SourceKind::Script, &script);

        let expected_path = collapse_ascent(&path).unwrap_or_else(|| path.clone());
        prop_assert_eq!(
            output.as_ref(),
            format!("import {{ x }} from '{expected_path}';\nconsole.log(x);\n")
        );
    }

    /// PROPERTY: Reference rewriting is idempotent.
    #[test]
    fn property_reference_rewrite_idempotent(dir in relative_suffix(), style in any::<bool>()) {
        let asset = if style { "component.css" } else { "template.html" };
        let script = format!("import view from './{dir}/{asset}';\n");
        let once = rewrite_references(&script).into_owned();
        let twice = rewrite_references(&once).into_owned();
        prop_assert_eq!(&once, &format!("import view from './{dir}/{asset}.js';\n"));
        prop_assert_eq!(once, twice);
    }
}
