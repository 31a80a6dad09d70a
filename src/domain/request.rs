//! Validated issuance request.

use crate::error::ValidationError;

/// Minimum token name length, in characters.
pub const MIN_NAME_LEN: usize = 2;
/// Maximum symbol length, in characters.
pub const MAX_SYMBOL_LEN: usize = 8;
/// Minimum description length, in characters.
pub const MIN_DESCRIPTION_LEN: usize = 5;
/// Maximum mint decimals accepted by the form.
pub const MAX_DECIMALS: u8 = 9;

/// Accepted image payload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// MIME type sent to the pinning backend.
    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    /// File name used for the multipart upload.
    pub fn file_name(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "token.jpeg",
            ImageFormat::Png => "token.png",
        }
    }
}

/// A validated token issuance request.
///
/// Built from form input through [`IssuanceRequest::new`], which enforces the
/// field constraints; immutable afterwards.
#[derive(Debug, Clone)]
pub struct IssuanceRequest {
    name: String,
    symbol: String,
    description: String,
    image: Vec<u8>,
    image_format: ImageFormat,
    decimals: u8,
    initial_supply: u64,
}

impl IssuanceRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        description: impl Into<String>,
        image: Vec<u8>,
        image_format: ImageFormat,
        decimals: u8,
        initial_supply: u64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let symbol = symbol.into();
        let description = description.into();

        let name_len = name.chars().count();
        if name_len < MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort {
                len: name_len,
                min: MIN_NAME_LEN,
            });
        }

        let symbol_len = symbol.chars().count();
        if symbol_len == 0 || symbol_len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolLength {
                len: symbol_len,
                max: MAX_SYMBOL_LEN,
            });
        }

        let description_len = description.chars().count();
        if description_len < MIN_DESCRIPTION_LEN {
            return Err(ValidationError::DescriptionTooShort {
                len: description_len,
                min: MIN_DESCRIPTION_LEN,
            });
        }

        if image.is_empty() {
            return Err(ValidationError::EmptyImage);
        }

        if decimals > MAX_DECIMALS {
            return Err(ValidationError::DecimalsOutOfRange {
                decimals,
                max: MAX_DECIMALS,
            });
        }

        Ok(Self {
            name,
            symbol,
            description,
            image,
            image_format,
            decimals,
            initial_supply,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn image_format(&self) -> ImageFormat {
        self.image_format
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn initial_supply(&self) -> u64 {
        self.initial_supply
    }
}
