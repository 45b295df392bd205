use serde::{Deserialize, Serialize};

/// Symbologies the serializer distinguishes. Only the EAN/UPC family changes
/// the output (font choice and bold handling); everything else renders alike.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub enum Symbology {
    Code11,
    #[serde(alias = "C25Matrix")]
    C25Standard,
    C25Inter,
    Code39,
    ExCode39,
    EANX,
    EANXChk,
    #[serde(alias = "EAN128")]
    GS1128,
    Codabar,
    #[default]
    Code128,
    Code16k,
    Code49,
    Code93,
    #[serde(alias = "RSS14")]
    DBarOmn,
    #[serde(alias = "RSSExp")]
    DBarExp,
    Telepen,
    UPCA,
    UPCAChk,
    UPCE,
    UPCEChk,
    Postnet,
    MSIPlessey,
    Pharma,
    PDF417,
    MicroPDF417,
    MaxiCode,
    QRCode,
    MicroQR,
    RMQR,
    ISBNX,
    RM4SCC,
    DataMatrix,
    EAN14,
    ITF14,
    Aztec,
    DotCode,
    HanXin,
    EANXCC,
    UPCACC,
    UPCECC,
    Channel,
    CodeOne,
    GridMatrix,
    Ultra,
}

impl Symbology {
    /// EAN/UPC symbologies print their human readable text in OCR-B.
    pub fn is_upcean(self) -> bool {
        matches!(
            self,
            Symbology::EANX
                | Symbology::EANXChk
                | Symbology::EANXCC
                | Symbology::UPCA
                | Symbology::UPCAChk
                | Symbology::UPCACC
                | Symbology::UPCE
                | Symbology::UPCEChk
                | Symbology::UPCECC
                | Symbology::ISBNX
        )
    }
}
