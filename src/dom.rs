use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Replace the text of the element with `element_id`.
pub fn set_text(element_id: &str, text: &str) -> anyhow::Result<()> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let el = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{element_id}"))?;
    el.set_text_content(Some(text));
    Ok(())
}

/// Expose the current phase to CSS as `data-phase` on the element.
pub fn set_phase_attribute(element_id: &str, phase: &str) -> anyhow::Result<()> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let el = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{element_id}"))?;
    el.set_attribute("data-phase", phase)
        .map_err(|e| anyhow::anyhow!("set data-phase: {e:?}"))
}
