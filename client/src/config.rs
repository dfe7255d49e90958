use mosaic_shared::GridConfig;

/// Id of the inline `<script type="application/json">` block holding the host config.
pub const CONFIG_ELEMENT_ID: &str = "mosaic-config";

/// An empty or whitespace-only block means "all defaults".
pub fn parse_grid_config(raw: &str) -> Result<GridConfig, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(GridConfig::default());
    }
    serde_json::from_str(raw)
}

/// Read the host page config, falling back to defaults when it is missing or malformed.
pub fn load_grid_config() -> GridConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return GridConfig::default();
    };

    match parse_grid_config(&raw) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("invalid #{CONFIG_ELEMENT_ID} config, using defaults: {e}").into(),
            );
            GridConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_block_uses_defaults() {
        assert_eq!(parse_grid_config("  \n").unwrap(), GridConfig::default());
    }

    #[test]
    fn reads_full_config() {
        let config = parse_grid_config(
            r#"{
                "base_path": "/static/mosaic",
                "columns": 6,
                "rows": 3,
                "tile_size_px": 256,
                "preload_all": true,
                "tile_labels": true
            }"#,
        )
        .unwrap();
        assert_eq!(config.base_path, "/static/mosaic");
        assert_eq!(config.columns, 6);
        assert_eq!(config.rows, 3);
        assert_eq!(config.tile_size_px, 256);
        assert!(config.preload_all);
        assert!(config.tile_labels);
    }

    #[test]
    fn malformed_block_is_an_error() {
        assert!(parse_grid_config("{ columns: 3").is_err());
        assert!(parse_grid_config(r#"{ "columns": -1 }"#).is_err());
    }
}
