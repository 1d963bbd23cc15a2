//! SPIR-V module preparation for hosts that load the compiled shaders.

use thiserror::Error;

/// First word of every valid SPIR-V binary.
pub const SPIRV_MAGIC: u32 = 0x0723_0203;

/// Entry point of the aspect-corrected vertex variant.
pub const ASPECT_VS: &str = "aspect_vs";
/// Entry point of the pass-through vertex variant.
pub const PASSTHROUGH_VS: &str = "passthrough_vs";
/// Entry point of the opaque-white fragment variant.
pub const WHITE_FS: &str = "white_fs";
/// Entry point of the opaque-red fragment variant.
pub const RED_FS: &str = "red_fs";

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("spir-v binary is empty")]
    Empty,
    #[error("spir-v binary length {0} is not a multiple of 4 bytes")]
    Truncated(usize),
    #[error("first word {0:#010x} is not the spir-v magic number")]
    BadMagic(u32),
}

/// Repacks a compiled SPIR-V byte blob into the `u32` word buffer that
/// shader-module creation expects. A binary produced on an opposite-endian
/// machine is detected via its byte-swapped magic number and corrected.
pub fn spirv_words(bytes: &[u8]) -> Result<Vec<u32>, ModuleError> {
    if bytes.is_empty() {
        return Err(ModuleError::Empty);
    }
    if bytes.len() % 4 != 0 {
        return Err(ModuleError::Truncated(bytes.len()));
    }

    let mut words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    match words[0] {
        SPIRV_MAGIC => {}
        w if w == SPIRV_MAGIC.swap_bytes() => {
            for word in &mut words {
                *word = word.swap_bytes();
            }
        }
        w => return Err(ModuleError::BadMagic(w)),
    }

    log::debug!("prepared {} spir-v words", words.len());
    Ok(words)
}
