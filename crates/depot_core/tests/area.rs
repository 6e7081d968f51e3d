use depot_core::{classify_area, MapView, AREA_CAINIAO, AREA_OTHER, AREA_SHUNFENG, AREA_YUNDA_JD};

#[test]
fn courier_names_imply_their_area() {
    assert_eq!(classify_area("菜鸟"), AREA_CAINIAO);
    assert_eq!(classify_area("蜂鸟自提点"), AREA_CAINIAO);
    assert_eq!(classify_area("韵达快递"), AREA_YUNDA_JD);
    assert_eq!(classify_area("京东"), AREA_YUNDA_JD);
    assert_eq!(classify_area("顺丰"), AREA_SHUNFENG);
    assert_eq!(classify_area("圆通速递"), AREA_SHUNFENG);
    assert_eq!(classify_area("中通"), AREA_SHUNFENG);
}

#[test]
fn canonical_names_classify_to_themselves() {
    assert_eq!(classify_area(AREA_CAINIAO), AREA_CAINIAO);
    assert_eq!(classify_area(AREA_YUNDA_JD), AREA_YUNDA_JD);
    assert_eq!(classify_area(AREA_SHUNFENG), AREA_SHUNFENG);
}

#[test]
fn unknown_text_falls_back_to_other() {
    assert_eq!(classify_area("宝岛理发站"), AREA_OTHER);
    assert_eq!(classify_area(""), AREA_OTHER);
}

#[test]
fn earlier_category_wins_on_mixed_text() {
    // Contains both 菜鸟 and 顺丰; the first default-order hit decides.
    assert_eq!(classify_area("菜鸟代收的顺丰件"), AREA_CAINIAO);
}

#[test]
fn overview_identity_is_the_named_variant() {
    assert_eq!(MapView::default(), MapView::Overview);
    assert_eq!(MapView::Overview.asset(), "demo-map.svg");
    assert!(MapView::Overview.sub_area().is_none());
    assert_eq!(MapView::YundaJd.sub_area(), Some(AREA_YUNDA_JD));
    assert_eq!(MapView::ALL.len(), 4);
}
