//! End-to-end behaviour of the built-in catalog through `Typograf::execute`

use kodegen_tools_typograf::{ExecuteOverrides, OutputMode, ProcessorOptions, Typograf};

mod common;

#[test]
fn test_times_sign_between_numbers() {
    let typograf = common::typograf("common");
    assert_eq!(typograf.execute("100 x 2"), "100×2");
}

#[test]
fn test_russian_quotes() {
    let typograf = common::typograf("ru");
    assert_eq!(typograf.execute("\"Пример\""), "«Пример»");
    assert_eq!(typograf.execute("ОАО \"Пример\""), "ОАО\u{A0}«Пример»");
}

#[test]
fn test_month_interval_dash() {
    let typograf = common::typograf("ru");
    assert_eq!(typograf.execute("Март-декабрь"), "Март—декабрь");
}

#[test]
fn test_russian_smoke() {
    let typograf = common::typograf("ru");
    let cases = [
        ("    Мир - мой мир!    ", "Мир\u{A0}— мой\u{A0}мир!"),
        (
            "Мороз был страшный но яблони выжили.",
            "Мороз был страшный, но\u{A0}яблони выжили.",
        ),
        (
            "Стекло двери, которая ведет на веранду, усеяно дождевыми каплями.",
            "Стекло двери, которая ведет на\u{A0}веранду, усеяно дождевыми каплями.",
        ),
        (
            "Роман, в котором творческие принципы Достоевского воплощаются в полной мере а удивительное владение сюжетом достигает подлинного расцвета.",
            "Роман, в\u{A0}котором творческие принципы Достоевского воплощаются в\u{A0}полной мере, а\u{A0}удивительное владение сюжетом достигает подлинного расцвета.",
        ),
        (
            "\"Энергия соблазна: от внутреннего к внешнему\"",
            "«Энергия соблазна: от\u{A0}внутреннего к\u{A0}внешнему»",
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(typograf.execute(input), expected, "input: {input:?}");
    }
}

#[test]
fn test_script_content_is_untouched() {
    let typograf = common::typograf("ru");
    assert_eq!(
        typograf.execute(
            "              asdk aksod         kasod koas/n<script>    var a = 10;   \n\n\n</script> askod kasodko askd     "
        ),
        "asdk aksod kasod koas/n<script>    var a = 10;   \n\n\n</script> askod kasodko askd"
    );
    assert_eq!(
        typograf.execute("<script>a  b</script>"),
        "<script>a  b</script>"
    );
}

#[test]
fn test_nested_pre_and_code() {
    let typograf = common::typograf("ru");
    assert_eq!(
        typograf.execute(
            "              <pre>1<code>23</code>45</pre> <code>1<pre>2<code>333</code></pre></code>    "
        ),
        "<pre>1<code>23</code>45</pre> <code>1<pre>2<code>333</code></pre></code>"
    );
}

#[test]
fn test_tag_attributes_are_untouched() {
    let typograf = common::typograf("ru");
    assert_eq!(
        typograf.execute("<a title=\"x - y\">Мир - мой мир</a>"),
        "<a title=\"x - y\">Мир\u{A0}— мой мир</a>"
    );
}

#[test]
fn test_disabling_language_rules() {
    let mut typograf = common::typograf("ru");
    typograf.disable("ru/*");

    assert_eq!(typograf.execute("\"Пример\""), "\"Пример\"");
    assert_eq!(typograf.execute("Март-декабрь"), "Март-декабрь");
    // Common rules still run
    assert_eq!(typograf.execute("  Мороз   был  "), "Мороз был");
}

#[test]
fn test_disable_through_options() {
    let options = ProcessorOptions::builder()
        .language("ru")
        .disable("ru/punctuation/quot")
        .build()
        .expect("valid options");
    let typograf = Typograf::with_defaults(options).expect("valid processor");
    assert_eq!(typograf.execute("\"Пример\""), "\"Пример\"");
}

#[test]
fn test_enable_rule_off_by_default() {
    let mut typograf = common::typograf("common");
    assert_eq!(typograf.execute("a\nb"), "a\nb");

    typograf.enable("common/html/nbr");
    assert_eq!(typograf.execute("a\nb"), "a<br/>\nb");
}

#[test]
fn test_language_override_per_call() {
    let typograf = common::typograf("common");
    assert_eq!(typograf.execute("\"Пример\""), "\"Пример\"");

    let ru = ExecuteOverrides::new().language("ru");
    assert_eq!(typograf.execute_with("\"Пример\"", &ru), "«Пример»");

    // The instance itself is unchanged
    assert_eq!(typograf.language(), "common");
}

#[test]
fn test_output_modes() {
    let input = "Мир - мой мир";

    let default = common::typograf_with_mode("ru", OutputMode::Default);
    assert_eq!(default.execute(input), "Мир\u{A0}— мой мир");

    let name = common::typograf_with_mode("ru", OutputMode::Name);
    assert_eq!(name.execute(input), "Мир&nbsp;&mdash; мой мир");

    let digit = common::typograf_with_mode("ru", OutputMode::Digit);
    assert_eq!(digit.execute(input), "Мир&#160;&#8212; мой мир");
}

#[test]
fn test_mode_override_per_call() {
    let typograf = common::typograf("ru");
    let overrides = ExecuteOverrides::new().mode(OutputMode::Name);
    assert_eq!(typograf.execute_with("«a»", &overrides), "&laquo;a&raquo;");
}

#[test]
fn test_entities_are_decoded_before_rules() {
    let typograf = common::typograf("ru");
    assert_eq!(typograf.execute("Мир &mdash; мой мир"), "Мир\u{A0}— мой мир");
}

#[test]
fn test_line_endings_are_normalized() {
    let typograf = common::typograf("common");
    assert_eq!(typograf.execute("a\r\nb\rc"), "a\nb\nc");
}

#[test]
fn test_empty_input() {
    let typograf = common::typograf("ru");
    assert_eq!(typograf.execute(""), "");
}

#[test]
fn test_repeated_execution_is_stable() {
    let typograf = common::typograf("ru");
    let inputs = [
        "Мороз был страшный но яблони выжили.",
        "Привет;; мир,, как дела??",
        "Мир - мой мир",
        "Мир -- мой мир",
        "Мир – мой мир",
        "Мир — мой мир",
        "Март-декабрь",
        "Я - он, ты - мы.",
    ];

    for input in inputs {
        let once = typograf.execute(input);
        assert_eq!(typograf.execute(&once), once, "input: {input:?}");
    }
}

#[test]
fn test_dash_before_short_last_word() {
    let typograf = common::typograf("ru");
    assert_eq!(
        typograf.execute("Я - он, ты - мы."),
        "Я\u{A0}—\u{A0}он, ты\u{A0}—\u{A0}мы."
    );
    assert_eq!(
        typograf.execute("Пн - Вт, 5 января"),
        "Пн\u{A0}—\u{A0}Вт, 5\u{A0}января"
    );
}

#[test]
fn test_shared_across_threads() {
    let typograf = std::sync::Arc::new(common::typograf("ru"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let typograf = std::sync::Arc::clone(&typograf);
            std::thread::spawn(move || typograf.execute("Март-декабрь"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread finishes"), "Март—декабрь");
    }
}
