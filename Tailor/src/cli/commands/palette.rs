//! CLI command for listing the built-in palette

use console::style;

use dyelab::palette::PALETTE;

/// Print every palette color with its RGB and hex value
pub fn execute(json: bool) -> anyhow::Result<()> {
    if json {
        let colors: Vec<_> = PALETTE
            .iter()
            .map(|c| serde_json::json!({ "name": c.name, "rgb": c.rgb }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&colors)?);
        return Ok(());
    }

    println!("Palette ({} colors):", PALETTE.len());
    for color in PALETTE {
        let [r, g, b] = color.rgb.0;
        println!(
            "  {:16} {:>3},{:>3},{:>3}  {}",
            color.name,
            r,
            g,
            b,
            style(format!("#{}", color.rgb.to_hex())).dim()
        );
    }
    Ok(())
}
