use anyhow::Result;

use izell_core::Page;

/// Print the page registry in navigation order.
pub fn run() -> Result<()> {
    for page in Page::ALL {
        println!("{}. {:<10} ({})", page.ordinal() + 1, page.title(), page.slug());
    }
    Ok(())
}
