#[cfg(test)]
#[allow(dead_code)]
mod tests {
    use rpn::{calculator::ErrorKind, Calculator};

    pub fn eval(source: &str) -> Result<i64, String> {
        Calculator::default()
            .eval(source)
            .map_err(|e| e.to_string())
    }

    pub fn eval_kind(source: &str) -> Result<i64, ErrorKind> {
        Calculator::default().eval(source).map_err(|e| e.kind)
    }
}

#[cfg(test)]
pub use tests::*;
