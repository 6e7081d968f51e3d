use depot_engine::{LocalCodeExtractor, RecognizedPair};
use pretty_assertions::assert_eq;

fn pair(code: &str, area: &str) -> RecognizedPair {
    RecognizedPair {
        code: code.to_string(),
        area: area.to_string(),
    }
}

fn extractor() -> LocalCodeExtractor {
    LocalCodeExtractor::new("菜鸟驿站")
}

#[test]
fn dash_lines_switch_the_running_area() {
    let pairs = extractor().extract("-韵达\n22-2-3456\n-顺丰\n1-1-0007");
    assert_eq!(pairs, vec![pair("22-2-3456", "韵达"), pair("1-1-0007", "顺丰")]);
}

#[test]
fn codes_before_any_marker_use_the_default_area() {
    let pairs = extractor().extract("12-3-4567\n-韵达\n22-2-3456");
    assert_eq!(
        pairs,
        vec![pair("12-3-4567", "菜鸟驿站"), pair("22-2-3456", "韵达")]
    );
}

#[test]
fn marker_colons_and_padding_are_stripped() {
    let pairs = extractor().extract("- 韵达京东：\n22-2-3456\n-顺丰快递:\n1-1-0007");
    assert_eq!(
        pairs,
        vec![pair("22-2-3456", "韵达京东"), pair("1-1-0007", "顺丰快递")]
    );
}

#[test]
fn lines_without_a_code_are_skipped_silently() {
    let pairs = extractor().extract("取件提醒\n\n  \n22-2-3456 请尽快领取\n号码 123456");
    assert_eq!(pairs, vec![pair("22-2-3456", "菜鸟驿站")]);
}

#[test]
fn only_the_first_code_per_line_is_taken() {
    let pairs = extractor().extract("22-2-3456 或 9-1-0001");
    assert_eq!(pairs, vec![pair("22-2-3456", "菜鸟驿站")]);
}

#[test]
fn code_embedded_in_surrounding_text_is_found() {
    let pairs = extractor().extract("您的快递9-1-0001已到站");
    assert_eq!(pairs, vec![pair("9-1-0001", "菜鸟驿站")]);
}

#[test]
fn empty_input_yields_no_pairs() {
    assert!(extractor().extract("").is_empty());
    assert!(extractor().extract("\n  \n").is_empty());
}

#[test]
fn extraction_is_idempotent_over_reconstructed_text() {
    let input = "-韵达\n22-2-3456\n-顺丰\n1-1-0007\n12-3-4567";
    let first = extractor().extract(input);

    let mut reconstructed = String::new();
    for p in &first {
        reconstructed.push_str(&format!("-{}\n{}\n", p.area, p.code));
    }
    let second = extractor().extract(&reconstructed);
    assert_eq!(second, first);
}
