//! Input decryption and HLS content protection.

use super::Context;
use crate::source::{Encryption, HlsContentProtection};
use crate::target::job::{DecryptionSettings, HlsEncryption, StaticKeyProvider};

pub fn translate_decryption(encryption: &Encryption, cx: &mut Context<'_>) -> DecryptionSettings {
    let source_mode = encryption.mode.as_deref();
    let mode = match source_mode {
        Some("aes-cbc-pkcs7") => Some("AES_CBC".to_string()),
        Some("aes-ctr") => Some("AES_CTR".to_string()),
        Some("aes-gcm") => Some("AES_GCM".to_string()),
        other => {
            cx.warn(
                &encryption.path.key("mode"),
                format!(
                    "MediaConvert does not support input encryption mode {}",
                    other.unwrap_or_default()
                ),
            );
            other.map(String::from)
        }
    };

    cx.info(
        &encryption.path,
        "If the region of your input decryption KMS key is different from the region you use \
         MediaConvert, the region must be specified in input decryption settings.",
    );

    DecryptionSettings {
        decryption_mode: mode,
        encrypted_decryption_key: encryption.key.clone(),
        initialization_vector: encryption.initialization_vector.clone(),
    }
}

/// Static-key AES-128 encryption for an HLS output group.
pub fn translate_hls_protection(protection: &HlsContentProtection) -> HlsEncryption {
    HlsEncryption {
        key_provider_type: "STATIC_KEY",
        encryption_method: "AES128",
        constant_initialization_vector: protection.initialization_vector.clone(),
        static_key_provider: StaticKeyProvider {
            static_key_value: protection.key.clone(),
            url: protection.license_acquisition_url.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConvertConfig;
    use crate::diagnostics::Level;

    fn encryption(mode: &str) -> Encryption {
        Encryption {
            mode: Some(mode.to_string()),
            key: Some("a2V5".to_string()),
            initialization_vector: Some("aXY=".to_string()),
            ..Encryption::default()
        }
    }

    #[test]
    fn maps_supported_modes_with_a_region_note() {
        let config = ConvertConfig::default();
        for (mode, expected) in [("aes-cbc-pkcs7", "AES_CBC"), ("aes-ctr", "AES_CTR"), ("aes-gcm", "AES_GCM")] {
            let mut cx = Context::new(&config);
            let settings = translate_decryption(&encryption(mode), &mut cx);
            assert_eq!(settings.decryption_mode.as_deref(), Some(expected));
            assert_eq!(settings.encrypted_decryption_key.as_deref(), Some("a2V5"));
            assert_eq!(cx.diagnostics.len(), 1);
            assert_eq!(cx.diagnostics.messages()[0].level, Level::Info);
        }
    }

    #[test]
    fn unsupported_mode_passes_through_with_a_warning() {
        let config = ConvertConfig::default();
        let mut cx = Context::new(&config);
        let settings = translate_decryption(&encryption("s3-aws-kms"), &mut cx);
        assert_eq!(settings.decryption_mode.as_deref(), Some("s3-aws-kms"));
        assert_eq!(cx.diagnostics.warnings().len(), 1);
        assert_eq!(cx.diagnostics.infos().len(), 1);
    }

    #[test]
    fn hls_protection_uses_a_static_key() {
        let protection = HlsContentProtection {
            key: Some("k".to_string()),
            initialization_vector: Some("iv".to_string()),
            license_acquisition_url: Some("https://keys.example.com".to_string()),
            ..HlsContentProtection::default()
        };
        let encryption = translate_hls_protection(&protection);
        assert_eq!(encryption.key_provider_type, "STATIC_KEY");
        assert_eq!(encryption.encryption_method, "AES128");
        assert_eq!(encryption.constant_initialization_vector.as_deref(), Some("iv"));
        assert_eq!(encryption.static_key_provider.url.as_deref(), Some("https://keys.example.com"));
    }
}
