use anyhow::{anyhow, Result};

pub const MAX_PAGE_SIZE: u32 = 100;

pub fn validate_base_url(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("base_url must not be empty"));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(anyhow!("base_url must start with http:// or https://"));
    }
    reqwest::Url::parse(trimmed).map_err(|err| anyhow!("invalid base_url: {}", err))?;
    Ok(())
}

pub fn validate_page_size(value: u32) -> Result<()> {
    if value == 0 || value > MAX_PAGE_SIZE {
        return Err(anyhow!("page_size must be between 1 and {}", MAX_PAGE_SIZE));
    }
    Ok(())
}
