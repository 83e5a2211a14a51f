pub fn parse_bound(input: &str) -> Result<f64, String> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("`{input}` is not a number"))?;

    if !value.is_finite() {
        return Err(String::from("Range bounds must be finite"));
    }

    Ok(value)
}
