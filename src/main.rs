use std::error::Error;
use std::{env, fs};

use converter::{compare_maps, CommonToUo, Translator, UoRequest, UoToCommon};

const SAMPLE: &str = include_str!("../fixtures/uo_product_detail.json");

fn main() -> Result<(), Box<dyn Error>> {
    let body = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_owned(),
    };
    let original: UoRequest = serde_json::from_str(&body)?;

    let common = UoToCommon::new().translate(&original)?;
    println!("=== UO -> Common ===");
    println!("{}\n", serde_json::to_string_pretty(&common)?);

    let restored = CommonToUo.translate(&common)?;
    println!("=== Common -> UO ===");
    println!("{}\n", serde_json::to_string_pretty(&restored)?);

    let product_id = |uo: &UoRequest| uo.is_event.catalog.product.as_ref().map(|p| p.id.clone());

    println!("=== Round-trip checks ===");
    println!(
        "bestMatch preserved: {}",
        compare_maps(&original.best_match, &restored.best_match)
    );
    println!(
        "queries preserved: {}",
        compare_maps(&original.queries, &restored.queries)
    );
    println!(
        "user id preserved: {}",
        original.is_event.user.id == restored.is_event.user.id
    );
    println!(
        "action preserved: {}",
        original.is_event.action == restored.is_event.action
    );
    println!(
        "product id preserved: {}",
        product_id(&original) == product_id(&restored)
    );

    Ok(())
}
