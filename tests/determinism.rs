use std::sync::Arc;
use std::thread;

use converter::{
    Converter, Direction, DyChooseRequest, DyToCommon, FixedClock, Translator, UoRequest,
    UoToCommon,
};

const UO_PRODUCT_DETAIL: &str = include_str!("../fixtures/uo_product_detail.json");
const DY_CHOOSE: &str = include_str!("../fixtures/dy_choose.json");

fn fixed_clock() -> FixedClock {
    FixedClock::from_unix(1_736_937_045)
}

#[test]
fn fixed_clock_translations_are_repeatable() {
    let uo: UoRequest = serde_json::from_str(UO_PRODUCT_DETAIL).expect("fixture decodes");
    let translator = UoToCommon::with_clock(fixed_clock());

    let first = translator.translate(&uo).expect("first");
    let second = translator.translate(&uo).expect("second");

    assert_eq!(first, second);
}

#[test]
fn system_clock_only_varies_session_and_defaulted_timestamp() {
    let dy: DyChooseRequest = serde_json::from_str(DY_CHOOSE).expect("fixture decodes");
    let translator = DyToCommon::new();

    let mut first = translator.translate(&dy).expect("first");
    let mut second = translator.translate(&dy).expect("second");
    first.timestamp.clear();
    second.timestamp.clear();
    assert_eq!(first, second);

    let mut uo: UoRequest = serde_json::from_str(UO_PRODUCT_DETAIL).expect("fixture decodes");
    uo.is_event.timestamp.clear();
    let translator = UoToCommon::new();

    let mut first = translator.translate(&uo).expect("first");
    let mut second = translator.translate(&uo).expect("second");
    for common in [&mut first, &mut second] {
        assert!(common.session.id.starts_with("sess_"));
        assert!(!common.timestamp.is_empty());
        common.session.id.clear();
        common.timestamp.clear();
    }
    assert_eq!(first, second);
}

#[test]
fn shared_converter_is_consistent_across_threads() {
    let converter = Arc::new(Converter::with_clock(fixed_clock()));
    let expected = converter
        .convert(Direction::UoToCommon, UO_PRODUCT_DETAIL.as_bytes())
        .expect("converts");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let converter = Arc::clone(&converter);
            thread::spawn(move || {
                converter
                    .convert(Direction::UoToCommon, UO_PRODUCT_DETAIL.as_bytes())
                    .expect("converts")
            })
        })
        .collect();

    for handle in handles {
        let conversion = handle.join().expect("thread completes");
        assert_eq!(conversion, expected);
    }
}
