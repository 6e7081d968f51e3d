use std::cmp::Ordering;

use depot_core::{area_weight, compare_codes, sort_for_view, MapView, PendingRecord};

fn record(id: &str, location: &str) -> PendingRecord {
    PendingRecord {
        id: id.to_string(),
        location: location.to_string(),
    }
}

#[test]
fn selected_sub_area_sorts_first_regardless_of_code() {
    let mut queue = vec![record("9-1-0001", "顺丰快递"), record("2-1-0002", "韵达京东")];
    sort_for_view(&mut queue, MapView::YundaJd);
    assert_eq!(queue[0].id, "2-1-0002");
    assert_eq!(queue[1].id, "9-1-0001");

    // The same queue under the Shunfeng map flips the winner.
    let mut queue = vec![record("9-1-0001", "顺丰快递"), record("2-1-0002", "韵达京东")];
    sort_for_view(&mut queue, MapView::Shunfeng);
    assert_eq!(queue[0].id, "9-1-0001");
}

#[test]
fn overview_uses_default_category_order() {
    let mut queue = vec![
        record("1-1-0001", "顺丰快递"),
        record("1-1-0002", "韵达京东"),
        record("1-1-0003", "菜鸟驿站"),
        record("1-1-0004", "宝岛理发站"),
    ];
    sort_for_view(&mut queue, MapView::Overview);
    let locations: Vec<_> = queue.iter().map(|r| r.location.as_str()).collect();
    assert_eq!(locations, ["菜鸟驿站", "韵达京东", "顺丰快递", "宝岛理发站"]);
}

#[test]
fn overview_weight_matches_by_courier_keyword() {
    // A courier name implies its area without exact equality.
    assert_eq!(area_weight("蜂鸟自提", MapView::Overview), 0);
    assert_eq!(area_weight("京东快递", MapView::Overview), 1);
    assert_eq!(area_weight("中通代收", MapView::Overview), 2);
    assert_eq!(area_weight("其他区域", MapView::Overview), 3);
    assert_eq!(area_weight("宝岛理发站", MapView::Overview), 4);
}

#[test]
fn sub_area_weight_shifts_non_matching_records_by_one() {
    assert_eq!(area_weight("韵达京东", MapView::YundaJd), 0);
    assert_eq!(area_weight("菜鸟驿站", MapView::YundaJd), 1);
    assert_eq!(area_weight("顺丰快递", MapView::YundaJd), 3);
    assert_eq!(area_weight("宝岛理发站", MapView::YundaJd), 5);
}

#[test]
fn codes_compare_numerically_not_lexically() {
    assert_eq!(compare_codes("9-1-0001", "10-1-0001"), Ordering::Less);
    assert_eq!(compare_codes("2-1-0002", "2-1-0002"), Ordering::Equal);
    assert_eq!(compare_codes("2-2-0001", "2-1-9999"), Ordering::Greater);
    // Leading zeros do not matter.
    assert_eq!(compare_codes("02-1-0005", "2-1-5"), Ordering::Equal);
}

#[test]
fn equal_prefix_puts_shorter_code_first() {
    assert_eq!(compare_codes("1-2", "1-2-0000"), Ordering::Less);
    assert_eq!(compare_codes("1-2-0000", "1-2"), Ordering::Greater);
}

#[test]
fn ordering_is_idempotent() {
    let mut queue = vec![
        record("12-3-4567", "宝岛理发站"),
        record("9-1-0001", "顺丰快递"),
        record("10-1-0001", "顺丰快递"),
        record("2-1-0002", "韵达京东"),
        record("21-3-3333", "韵达东区"),
    ];
    sort_for_view(&mut queue, MapView::Overview);
    let once = queue.clone();
    sort_for_view(&mut queue, MapView::Overview);
    assert_eq!(queue, once);
}

#[test]
fn sorted_adjacent_pairs_agree_with_both_keys() {
    let mut queue = vec![
        record("10-1-0001", "顺丰快递"),
        record("9-1-0001", "顺丰快递"),
        record("2-1-0002", "韵达京东"),
        record("1-1-0009", "菜鸟驿站"),
    ];
    sort_for_view(&mut queue, MapView::Overview);
    for pair in queue.windows(2) {
        let wa = area_weight(&pair[0].location, MapView::Overview);
        let wb = area_weight(&pair[1].location, MapView::Overview);
        assert!(wa <= wb);
        if wa == wb {
            assert_ne!(compare_codes(&pair[0].id, &pair[1].id), Ordering::Greater);
        }
    }
}
