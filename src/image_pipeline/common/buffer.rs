use crate::image_pipeline::common::error::{ConversionError, Result};

/// Allocates a zero-filled buffer, reporting allocator refusal instead of aborting.
pub fn alloc_buffer(what: &'static str, len: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| ConversionError::AllocationFailure { what, len })?;
    buffer.resize(len, 0);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_zeroed() {
        let buffer = alloc_buffer("plane", 16).unwrap();
        assert_eq!(buffer, vec![0u8; 16]);
    }

    #[test]
    fn test_alloc_failure_is_reported() {
        let result = alloc_buffer("rgb", usize::MAX);
        assert!(matches!(
            result,
            Err(ConversionError::AllocationFailure { what: "rgb", len: usize::MAX })
        ));
    }
}
