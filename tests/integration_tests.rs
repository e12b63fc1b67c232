use textshape::{
    compare_lines, csv_to_json, dedupe_lines, detect_separator, format_json, json_to_csv,
    reformat, repair_json, CsvOptions, Delimiter, Direction, OutputShape, QuoteStyle,
    ReformatOptions, Separator, SortOrder,
};

#[test]
fn test_csv_with_quoted_cells_and_coercion() {
    let csv = concat!(
        "city,population,meta\n",
        "\"Springfield, IL\",114000,\"{\"\"state\"\":\"\"IL\"\"}\"\n",
        "Shelbyville,40000,none\n",
    );
    let options = CsvOptions::new()
        .with_separator(Separator::Comma)
        .with_parse_numbers(true)
        .with_parse_json(true)
        .with_minify(true);

    let json = csv_to_json(csv, &options).unwrap();
    assert_eq!(
        json,
        concat!(
            "[{\"city\":\"Springfield, IL\",\"population\":114000,",
            "\"meta\":{\"state\":\"IL\"}},",
            "{\"city\":\"Shelbyville\",\"population\":40000,\"meta\":\"none\"}]"
        )
    );
}

#[test]
fn test_csv_auto_detection_end_to_end() {
    let tsv = "a\tb\n1\t2";
    let options = CsvOptions::new().with_minify(true);
    assert_eq!(detect_separator(tsv), Separator::Tab);
    assert_eq!(
        csv_to_json(tsv, &options).unwrap(),
        "[{\"a\":\"1\",\"b\":\"2\"}]"
    );
}

#[test]
fn test_keyed_output_with_colliding_and_empty_keys() {
    let csv = "host,port,zone\nweb,80,us\n,9,eu\nweb,443,us";
    let options = CsvOptions::new()
        .with_separator(Separator::Comma)
        .with_output(OutputShape::Keyed)
        .with_minify(true);

    let json = csv_to_json(csv, &options).unwrap();
    // the blank-key row is dropped, the duplicate key keeps its slot with
    // the later row's values
    assert_eq!(json, "{\"web\":{\"port\":\"443\",\"zone\":\"us\"}}");
}

#[test]
fn test_ragged_rows_pad_and_truncate() {
    let csv = "a,b,c\n1\n2,3,4,5";
    let options = CsvOptions::new()
        .with_separator(Separator::Comma)
        .with_minify(true);

    let json = csv_to_json(csv, &options).unwrap();
    assert_eq!(
        json,
        "[{\"a\":\"1\",\"b\":\"\",\"c\":\"\"},{\"a\":\"2\",\"b\":\"3\",\"c\":\"4\"}]"
    );
}

#[test]
fn test_json_to_csv_header_union_and_missing_fields() {
    let json = "[{\"name\":\"ada\",\"lang\":\"en\"},{\"name\":\"bob\",\"age\":4}]";
    let csv = json_to_csv(json, Separator::Semicolon).unwrap();
    assert_eq!(csv, "name;lang;age\nada;en;\nbob;;4");
}

#[test]
fn test_json_to_csv_shapes() {
    assert_eq!(
        json_to_csv("{\"k\":\"v\",\"n\":3}", Separator::Comma).unwrap(),
        "k,v\nn,3"
    );
    assert_eq!(
        json_to_csv("[[\"a\",1],[\"b\",2]]", Separator::Comma).unwrap(),
        "a,1\nb,2"
    );
    assert_eq!(json_to_csv("\"solo\"", Separator::Comma).unwrap(), "solo");
}

#[test]
fn test_reformat_full_pipeline() {
    let options = ReformatOptions::new()
        .with_delimiter(Delimiter::Semicolon)
        .with_quote_style(QuoteStyle::Double)
        .with_quote_only_if_needed(true)
        .with_dedupe(true)
        .with_case_sensitive_dedupe(false)
        .with_sort(SortOrder::Ascending);

    let input = "banana\nApple\n'apple'\n\"has;semi\"\n\nbanana";
    let delimited = reformat(input, Direction::ToDelimited, &options);
    assert_eq!(delimited, "Apple;banana;\"has;semi\"");
}

#[test]
fn test_reformat_back_to_column() {
    let options = ReformatOptions::new();
    assert_eq!(
        reformat("a, \"b, with comma\" ,c", Direction::ToLines, &options),
        "a\nb, with comma\nc"
    );
}

#[test]
fn test_reformat_custom_delimiter_round_trip() {
    let options = ReformatOptions::new().with_custom_delimiter(" | ");
    let delimited = reformat("one\ntwo\nthree", Direction::ToDelimited, &options);
    assert_eq!(delimited, "one|two|three");
    assert_eq!(
        reformat(&delimited, Direction::ToLines, &options),
        "one\ntwo\nthree"
    );
}

#[test]
fn test_compare_lists_case_policies() {
    let sensitive = compare_lines("Apple\npear", "apple\npear", true);
    assert_eq!(sensitive.both, vec!["pear"]);
    assert_eq!(sensitive.only_left, vec!["Apple"]);
    assert_eq!(sensitive.only_right, vec!["apple"]);

    let folded = compare_lines("Apple\npear", "apple\npear", false);
    assert_eq!(folded.both, vec!["apple", "pear"]);
    assert!(folded.only_left.is_empty());
    assert!(folded.only_right.is_empty());
}

#[test]
fn test_dedupe_list_tool() {
    let input = "alpha\nAlpha\n beta \nbeta\n\ngamma";
    assert_eq!(dedupe_lines(input, false), vec!["alpha", "beta", "gamma"]);
    assert_eq!(
        dedupe_lines(input, true),
        vec!["alpha", "Alpha", "beta", "gamma"]
    );
}

#[test]
fn test_format_json_surfaces_position() {
    let err = format_json("{\n  \"a\": 1,\n  broken\n}", false).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 3"), "unexpected message: {message}");
}

#[test]
fn test_repair_then_format() {
    let fixed = repair_json("{server: 'web-1', ports: [80, 443,],}").unwrap();
    let pretty = format_json(&fixed, false).unwrap();
    assert_eq!(
        pretty,
        "{\n  \"server\": \"web-1\",\n  \"ports\": [\n    80,\n    443\n  ]\n}"
    );
}

#[test]
fn test_empty_inputs_are_harmless() {
    let options = CsvOptions::new().with_minify(true);
    assert_eq!(csv_to_json("", &options).unwrap(), "[]");
    assert_eq!(
        reformat("", Direction::ToDelimited, &ReformatOptions::new()),
        ""
    );
    assert!(dedupe_lines("", true).is_empty());
    let report = compare_lines("", "", false);
    assert!(report.both.is_empty() && report.only_left.is_empty() && report.only_right.is_empty());
}
