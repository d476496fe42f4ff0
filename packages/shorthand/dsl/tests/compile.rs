use pretty_assertions::assert_eq;
use shorthand_dsl::{Diagnostic, DslError, compile};
use shorthand_tables::{Config, Tables};

fn small_config() -> Config {
    Config::with_tables(Tables::from_entries(
        &[("bold", "font-bold"), ("noSelect", "")],
        &[("width", "w")],
    ))
}

#[test_log::test]
fn resolves_lookup_override_verbatim_and_arbitrary_value_in_access_order() {
    let compiled = compile("SS.bold.noSelect.width(12)", &small_config()).unwrap();

    assert_eq!(compiled.class_template, "`flex font-bold noSelect w-[12]`");
    assert_eq!(compiled.style_object, None);
    assert_eq!(compiled.diagnostics, vec![]);
}

#[test_log::test]
fn compiles_with_builtin_tables() {
    let compiled = compile("SS.block.noFont.color('#bd0a0a')", &Config::default()).unwrap();

    assert_eq!(compiled.class_template, "`flex block noFont text-[#bd0a0a]`");
    assert!(compiled.diagnostics.is_empty());
}

#[test_log::test]
fn multi_line_chain_with_prefixed_paddings() {
    let text = "SS.noSelect.color_white.size2xl
        .paddingLeft('m')
        .paddingRight('s')
        .backgroundColor('darkerBlue')";
    let compiled = compile(text, &Config::default()).unwrap();

    assert_eq!(
        compiled.class_template,
        "`flex user-select-none color-white size2xl pl-[m] pr-[s] bg-[darkerBlue]`"
    );
}

#[test_log::test]
fn conditional_and_responsive_classes() {
    let compiled = compile("SS.row.f1(isOpen && !busy).$s.col", &Config::default()).unwrap();

    assert_eq!(
        compiled.class_template,
        "`flex flex-row ${(isOpen && !busy)?('flex-1'):''} sm:flex-col`"
    );
}

#[test_log::test]
fn variable_arbitrary_values_become_style_entries() {
    let compiled = compile("SS.bold.width(size() * 2).zIndex(layer)", &Config::default()).unwrap();

    assert_eq!(compiled.class_template, "`flex font-bold`");
    assert_eq!(
        compiled.style_object.as_deref(),
        Some("{'width': size() * 2, 'zIndex': layer}")
    );
}

#[test_log::test]
fn variable_style_keys_are_not_hyphenated() {
    let compiled = compile("SS.backgroundColor(theme.bg)", &Config::default()).unwrap();
    assert_eq!(
        compiled.style_object.as_deref(),
        Some("{'backgroundColor': theme.bg}")
    );
}

#[test_log::test]
fn constant_text_cannot_close_the_template() {
    let compiled = compile("SS.content('a`b ${x}')", &small_config()).unwrap();

    assert_eq!(compiled.class_template, "`flex content-[a\\`b_\\${x}]`");
    assert_eq!(
        compiled.diagnostics,
        vec![Diagnostic::MissingLookupEntry {
            key: "content".to_string(),
            fallback: "content-[a\\`b_\\${x}]".to_string(),
        }]
    );
}

#[test_log::test]
fn responsive_variable_arbitrary_value_fails() {
    let result = compile("SS.$s.width(size)", &Config::default());
    assert_eq!(
        result,
        Err(DslError::UnsupportedResponsiveArbitraryStyle {
            key: "width".to_string()
        })
    );
}

#[test_log::test]
fn icon_escape_markers_are_stripped_and_appended() {
    let compiled = compile(
        "SS.icon[p.image as 'icon'].f1[icon as 'icon']",
        &Config::default(),
    )
    .unwrap();

    assert_eq!(compiled.class_template, "`flex icon flex-1 ${icon} ${p.image}`");
}

#[test_log::test]
fn preload_and_style_literal() {
    let compiled = compile(
        "SS.preload(SS.bold.hidden(collapsed)).$style({opacity: fade}).f1",
        &Config::default(),
    )
    .unwrap();

    assert_eq!(
        compiled.class_template,
        "`flex font-bold ${(collapsed)?('hidden'):''} flex-1`"
    );
    assert_eq!(compiled.style_object.as_deref(), Some("{...({opacity: fade})}"));
}

#[test_log::test]
fn mapped_key_with_constant_argument_is_gated_by_its_source_text() {
    let compiled = compile("SS.border('solid 1px #ffffff33')", &Config::default()).unwrap();

    assert_eq!(
        compiled.class_template,
        "`flex ${('solid 1px #ffffff33')?('border'):''}`"
    );
}

#[test_log::test]
fn foreign_root_is_rejected() {
    let result = compile("styles.bold", &Config::default());
    assert!(matches!(result, Err(DslError::InvalidDslExpression { .. })));
}
