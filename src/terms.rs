//! Terms of service.
//!
//! The document exists in Korean and English only. Korean readers get the
//! Korean text; every other locale falls back to English.

use crate::i18n::Locale;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TermsSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// A complete terms-of-service text in one language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsDocument {
    pub locale: Locale,
    pub title: &'static str,
    /// ISO date the current text took effect
    pub effective_date: &'static str,
    pub sections: &'static [TermsSection],
}

impl TermsDocument {
    /// The document to show for a reader's locale.
    pub fn for_locale(locale: Locale) -> &'static TermsDocument {
        match locale {
            Locale::Ko => &KOREAN_TERMS,
            Locale::En | Locale::Ja | Locale::Zh => &ENGLISH_TERMS,
        }
    }
}

// ==================== Korean Terms ====================

pub static KOREAN_TERMS: TermsDocument = TermsDocument {
    locale: Locale::Ko,
    title: "이용약관",
    effective_date: "2024-01-01",
    sections: &[
        TermsSection {
            heading: "제1조 (목적)",
            paragraphs: &["본 약관은 서비스가 제공하는 정신건강 정보 및 관련 서비스의 이용 조건과 절차, 이용자와 운영자의 권리·의무를 규정함을 목적으로 합니다."],
        },
        TermsSection {
            heading: "제2조 (의료 면책)",
            paragraphs: &[
                "본 서비스에서 제공하는 모든 콘텐츠는 일반적인 교육 목적의 정보이며, 전문적인 의학적 진단이나 치료를 대체하지 않습니다.",
                "정신건강 문제로 어려움을 겪고 있다면 반드시 의사 또는 정신건강 전문가와 상담하시기 바랍니다. 위기 상황에서는 즉시 109 또는 119에 연락하세요.",
            ],
        },
        TermsSection {
            heading: "제3조 (추천 프로그램)",
            paragraphs: &[
                "회원은 추천 코드를 발급받아 다른 이용자에게 공유할 수 있습니다. 한 회원은 하나의 추천 코드만 적용할 수 있으며, 자신의 코드는 적용할 수 없습니다.",
                "부정한 방법으로 추천 혜택을 취득한 경우 운영자는 해당 혜택을 회수할 수 있습니다.",
            ],
        },
        TermsSection {
            heading: "제4조 (제휴 링크)",
            paragraphs: &["일부 콘텐츠에는 제휴 링크가 포함되어 있으며, 이를 통해 구매가 이루어질 경우 운영자는 일정 수수료를 받을 수 있습니다. 이는 이용자의 구매 가격에 영향을 주지 않습니다."],
        },
        TermsSection {
            heading: "제5조 (약관의 변경)",
            paragraphs: &["운영자는 관련 법령을 위반하지 않는 범위에서 본 약관을 변경할 수 있으며, 변경 시 시행일 7일 전에 공지합니다."],
        },
    ],
};

// ==================== English Terms ====================

pub static ENGLISH_TERMS: TermsDocument = TermsDocument {
    locale: Locale::En,
    title: "Terms of Service",
    effective_date: "2024-01-01",
    sections: &[
        TermsSection {
            heading: "Article 1 (Purpose)",
            paragraphs: &["These terms set out the conditions and procedures for using the mental-health information and related services provided, and the rights and obligations of users and the operator."],
        },
        TermsSection {
            heading: "Article 2 (Medical Disclaimer)",
            paragraphs: &[
                "All content on this service is general educational information and does not replace professional medical diagnosis or treatment.",
                "If you are struggling with your mental health, please consult a doctor or a mental-health professional. In a crisis, contact your local emergency number immediately.",
            ],
        },
        TermsSection {
            heading: "Article 3 (Referral Program)",
            paragraphs: &[
                "Members may obtain a referral code and share it with others. Each member may apply only one referral code and may not apply their own.",
                "The operator may revoke referral benefits obtained by fraudulent means.",
            ],
        },
        TermsSection {
            heading: "Article 4 (Affiliate Links)",
            paragraphs: &["Some content contains affiliate links. The operator may earn a commission on purchases made through them; this does not change the price you pay."],
        },
        TermsSection {
            heading: "Article 5 (Changes to These Terms)",
            paragraphs: &["The operator may amend these terms within the limits of applicable law and will announce changes seven days before they take effect."],
        },
    ],
};
