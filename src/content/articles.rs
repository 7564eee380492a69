//! Compiled-in article data.

use crate::content::model::ArticleSection as S;
use crate::content::model::ListType::{Bullet, Numbered};
use crate::content::model::{Affiliate, Article, Category, ProductCategory, RecommendedProduct, Source};
use crate::i18n::Localized;
use chrono::NaiveDate;

/// # Panics
/// Panics on an impossible calendar date; every date below is a literal.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("compiled-in catalog dates are valid")
}

fn source(name: &str, organization: &str, url: &str, accessed: NaiveDate) -> Source {
    Source {
        name: name.to_string(),
        organization: organization.to_string(),
        url: url.to_string(),
        access_date: accessed,
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// The full article catalog, in display order.
pub(crate) fn default_articles() -> Vec<Article> {
    vec![
        mental_health_basics(),
        depression(),
        anxiety_disorders(),
        ptsd(),
        ocd(),
        stress_management(),
        sleep_and_mood(),
        supporting_a_loved_one(),
        workplace_burnout(),
    ]
}

fn mental_health_basics() -> Article {
    Article {
        id: "what-is-mental-health".to_string(),
        category: Category::Basics,
        title: Localized::text(
            "정신건강이란 무엇인가요?",
            "What Is Mental Health?",
            "メンタルヘルスとは？",
            "什么是心理健康？",
        ),
        summary: Localized::text(
            "정신건강은 질병이 없는 상태를 넘어 일상의 스트레스에 대처하고 잠재력을 실현하는 상태입니다.",
            "Mental health is more than the absence of illness: it is the ability to cope with everyday stress and realize your potential.",
            "メンタルヘルスとは病気がないことだけではなく、日常のストレスに対処し力を発揮できる状態です。",
            "心理健康不仅仅是没有疾病，而是能够应对日常压力并发挥自身潜能的状态。",
        ),
        content: Localized::new(
            vec![
                S::text(
                    "정신건강의 정의",
                    &["세계보건기구는 정신건강을 개인이 자신의 능력을 인식하고, 일상적인 스트레스에 대처하며, 생산적으로 일하고, 공동체에 기여할 수 있는 안녕 상태로 정의합니다."],
                ),
                S::list(
                    "정신건강에 영향을 주는 요인",
                    Bullet,
                    &["유전적·생물학적 요인", "어린 시절의 경험", "사회적 관계와 지지", "경제적 상황과 직장 환경"],
                ),
            ],
            vec![
                S::text(
                    "Defining mental health",
                    &["The World Health Organization describes mental health as a state of well-being in which a person realizes their own abilities, copes with the normal stresses of life, works productively and contributes to their community."],
                ),
                S::list(
                    "What shapes mental health",
                    Bullet,
                    &["Genetic and biological factors", "Childhood experiences", "Social relationships and support", "Financial situation and work environment"],
                ),
            ],
            vec![
                S::text(
                    "メンタルヘルスの定義",
                    &["世界保健機関は、メンタルヘルスを、自分の能力を認識し、日常のストレスに対処し、生産的に働き、地域社会に貢献できる良好な状態と定義しています。"],
                ),
                S::list(
                    "メンタルヘルスに影響する要因",
                    Bullet,
                    &["遺伝的・生物学的要因", "幼少期の経験", "人間関係とサポート", "経済状況と職場環境"],
                ),
            ],
            vec![
                S::text(
                    "心理健康的定义",
                    &["世界卫生组织将心理健康定义为一种良好状态：个人能够认识自己的能力，应对日常生活压力，有成效地工作，并为社区做出贡献。"],
                ),
                S::list(
                    "影响心理健康的因素",
                    Bullet,
                    &["遗传与生物因素", "童年经历", "社会关系与支持", "经济状况与工作环境"],
                ),
            ],
        ),
        read_time: 4,
        tags: tags(&["mental-health", "wellbeing", "introduction"]),
        sources: vec![source(
            "Mental health: strengthening our response",
            "World Health Organization",
            "https://www.who.int/news-room/fact-sheets/detail/mental-health-strengthening-our-response",
            date(2024, 1, 10),
        )],
        last_updated: date(2024, 1, 15),
        featured: Some(true),
        recommended_products: None,
    }
}

fn depression() -> Article {
    Article {
        id: "understanding-depression".to_string(),
        category: Category::Conditions,
        title: Localized::text(
            "우울증 이해하기",
            "Understanding Depression",
            "うつ病を理解する",
            "认识抑郁症",
        ),
        summary: Localized::text(
            "우울증은 흔하지만 치료 가능한 질환입니다. 주요 증상과 도움을 구하는 방법을 알아보세요.",
            "Depression is common and treatable. Learn the main symptoms and how to seek help.",
            "うつ病はよくある、治療可能な病気です。主な症状と助けを求める方法を紹介します。",
            "抑郁症很常见，也可以治疗。了解主要症状以及如何寻求帮助。",
        ),
        content: Localized::new(
            vec![
                S::text(
                    "우울증이란?",
                    &["우울증은 2주 이상 지속되는 우울한 기분이나 흥미 상실을 특징으로 하는 기분 장애입니다.", "의지가 약해서 생기는 것이 아니며, 적절한 치료로 회복할 수 있습니다."],
                ),
                S::list(
                    "주요 증상",
                    Bullet,
                    &["지속적인 슬픔이나 공허감", "즐겁던 활동에 대한 흥미 상실", "수면과 식욕의 변화", "피로감과 집중력 저하", "무가치감이나 과도한 죄책감"],
                ),
            ],
            vec![
                S::text(
                    "What is depression?",
                    &["Depression is a mood disorder marked by a low mood or loss of interest that lasts for two weeks or more.", "It is not a sign of weakness, and with the right treatment people recover."],
                ),
                S::list(
                    "Common symptoms",
                    Bullet,
                    &["Persistent sadness or emptiness", "Loss of interest in activities once enjoyed", "Changes in sleep and appetite", "Fatigue and difficulty concentrating", "Feelings of worthlessness or excessive guilt"],
                ),
            ],
            vec![
                S::text(
                    "うつ病とは？",
                    &["うつ病は、2週間以上続く気分の落ち込みや興味の喪失を特徴とする気分障害です。", "意志の弱さが原因ではなく、適切な治療によって回復できます。"],
                ),
                S::list(
                    "主な症状",
                    Bullet,
                    &["持続する悲しみや空虚感", "以前楽しめた活動への興味の喪失", "睡眠や食欲の変化", "疲労感と集中力の低下", "無価値感や過度な罪悪感"],
                ),
            ],
            vec![
                S::text(
                    "什么是抑郁症？",
                    &["抑郁症是一种情绪障碍，其特征是情绪低落或兴趣丧失持续两周或以上。", "它并不是软弱的表现，经过适当治疗是可以康复的。"],
                ),
                S::list(
                    "常见症状",
                    Bullet,
                    &["持续的悲伤或空虚感", "对曾经喜欢的活动失去兴趣", "睡眠和食欲改变", "疲劳和注意力难以集中", "无价值感或过度内疚"],
                ),
            ],
        ),
        read_time: 6,
        tags: tags(&["depression", "mood", "symptoms"]),
        sources: vec![
            source(
                "Depressive disorder (depression)",
                "World Health Organization",
                "https://www.who.int/news-room/fact-sheets/detail/depression",
                date(2024, 2, 1),
            ),
            source(
                "Depression",
                "National Institute of Mental Health",
                "https://www.nimh.nih.gov/health/topics/depression",
                date(2024, 2, 1),
            ),
        ],
        last_updated: date(2024, 2, 5),
        featured: Some(true),
        recommended_products: None,
    }
}

fn anxiety_disorders() -> Article {
    Article {
        id: "anxiety-disorders".to_string(),
        category: Category::Conditions,
        title: Localized::text(
            "불안장애의 종류와 특징",
            "Types of Anxiety Disorders",
            "不安障害の種類と特徴",
            "焦虑障碍的类型与特点",
        ),
        summary: Localized::text(
            "일상적인 걱정과 불안장애는 어떻게 다를까요? 대표적인 불안장애를 정리했습니다.",
            "How is everyday worry different from an anxiety disorder? An overview of the most common types.",
            "日常的な心配と不安障害はどう違うのでしょうか。代表的な不安障害をまとめました。",
            "日常担忧与焦虑障碍有何不同？本文概述最常见的几种类型。",
        ),
        content: Localized::new(
            vec![
                S::text(
                    "걱정과 불안장애의 차이",
                    &["불안은 위험에 대한 자연스러운 반응이지만, 불안이 지나치게 크고 오래 지속되어 일상생활을 방해한다면 불안장애일 수 있습니다."],
                ),
                S::list(
                    "대표적인 불안장애",
                    Bullet,
                    &["범불안장애", "공황장애", "사회불안장애", "특정 공포증"],
                ),
            ],
            vec![
                S::text(
                    "Worry versus an anxiety disorder",
                    &["Anxiety is a natural response to danger, but when it is excessive, long-lasting and gets in the way of daily life it may be an anxiety disorder."],
                ),
                S::list(
                    "Common anxiety disorders",
                    Bullet,
                    &["Generalized anxiety disorder", "Panic disorder", "Social anxiety disorder", "Specific phobias"],
                ),
            ],
            vec![
                S::text(
                    "心配と不安障害の違い",
                    &["不安は危険に対する自然な反応ですが、過剰で長く続き、日常生活に支障をきたす場合は不安障害の可能性があります。"],
                ),
                S::list(
                    "代表的な不安障害",
                    Bullet,
                    &["全般性不安障害", "パニック障害", "社交不安障害", "限局性恐怖症"],
                ),
            ],
            vec![
                S::text(
                    "担忧与焦虑障碍的区别",
                    &["焦虑是对危险的自然反应，但如果焦虑过度、持续时间长并影响日常生活，就可能是焦虑障碍。"],
                ),
                S::list(
                    "常见的焦虑障碍",
                    Bullet,
                    &["广泛性焦虑障碍", "惊恐障碍", "社交焦虑障碍", "特定恐惧症"],
                ),
            ],
        ),
        read_time: 5,
        tags: tags(&["anxiety", "panic", "phobia"]),
        sources: vec![source(
            "Anxiety Disorders",
            "National Institute of Mental Health",
            "https://www.nimh.nih.gov/health/topics/anxiety-disorders",
            date(2024, 2, 10),
        )],
        last_updated: date(2024, 2, 12),
        featured: None,
        recommended_products: None,
    }
}

fn ptsd() -> Article {
    Article {
        id: "ptsd-overview".to_string(),
        category: Category::Conditions,
        title: Localized::text(
            "외상 후 스트레스 장애(PTSD)",
            "Post-Traumatic Stress Disorder (PTSD)",
            "心的外傷後ストレス障害（PTSD）",
            "创伤后应激障碍（PTSD）",
        ),
        summary: Localized::text(
            "충격적인 사건 이후 나타날 수 있는 PTSD의 증상과 회복을 돕는 방법을 소개합니다.",
            "PTSD can develop after a traumatic event. Learn its symptoms and what supports recovery.",
            "トラウマとなる出来事の後に生じうるPTSDの症状と、回復を助ける方法を紹介します。",
            "创伤事件后可能出现PTSD。了解其症状以及有助于康复的方法。",
        ),
        content: Localized::new(
            vec![
                S::list(
                    "네 가지 증상군",
                    Bullet,
                    &["침습: 원치 않는 기억과 악몽", "회피: 사건을 떠올리게 하는 것을 피함", "인지와 기분의 부정적 변화", "과각성: 쉽게 놀라고 잠들기 어려움"],
                ),
                S::text(
                    "회복을 위해",
                    &["트라우마 중심 인지행동치료와 EMDR은 효과가 입증된 치료법입니다. 증상이 한 달 이상 지속되면 전문가와 상담하세요."],
                ),
            ],
            vec![
                S::list(
                    "Four groups of symptoms",
                    Bullet,
                    &["Intrusion: unwanted memories and nightmares", "Avoidance of reminders of the event", "Negative changes in thinking and mood", "Hyperarousal: being easily startled, trouble sleeping"],
                ),
                S::text(
                    "Toward recovery",
                    &["Trauma-focused cognitive behavioural therapy and EMDR are well-supported treatments. If symptoms last longer than a month, talk to a professional."],
                ),
            ],
            vec![
                S::list(
                    "4つの症状群",
                    Bullet,
                    &["侵入：望まない記憶や悪夢", "回避：出来事を思い出させるものを避ける", "認知と気分の否定的な変化", "過覚醒：驚きやすく眠りにくい"],
                ),
                S::text(
                    "回復に向けて",
                    &["トラウマ焦点化認知行動療法やEMDRは効果が確認されている治療法です。症状が1か月以上続く場合は専門家に相談してください。"],
                ),
            ],
            vec![
                S::list(
                    "四类症状",
                    Bullet,
                    &["闯入：不想要的记忆和噩梦", "回避：避开与事件相关的事物", "认知和情绪的负面变化", "过度警觉：容易受惊、难以入睡"],
                ),
                S::text(
                    "走向康复",
                    &["以创伤为中心的认知行为疗法和EMDR是经过验证的治疗方法。如果症状持续超过一个月，请咨询专业人士。"],
                ),
            ],
        ),
        read_time: 6,
        tags: tags(&["ptsd", "trauma"]),
        sources: vec![source(
            "Post-Traumatic Stress Disorder",
            "National Institute of Mental Health",
            "https://www.nimh.nih.gov/health/topics/post-traumatic-stress-disorder-ptsd",
            date(2024, 3, 2),
        )],
        last_updated: date(2024, 3, 4),
        featured: None,
        recommended_products: None,
    }
}

fn ocd() -> Article {
    Article {
        id: "ocd-overview".to_string(),
        category: Category::Conditions,
        title: Localized::text(
            "강박장애(OCD) 바로 알기",
            "Obsessive-Compulsive Disorder (OCD)",
            "強迫症（OCD）を正しく知る",
            "正确认识强迫症（OCD）",
        ),
        summary: Localized::text(
            "강박장애는 꼼꼼한 성격과 다릅니다. 강박사고와 강박행동의 악순환을 이해해 보세요.",
            "OCD is not the same as being tidy. Understand the cycle of obsessions and compulsions.",
            "強迫症は几帳面な性格とは異なります。強迫観念と強迫行為の悪循環を理解しましょう。",
            "强迫症不同于爱整洁。了解强迫思维与强迫行为的恶性循环。",
        ),
        content: Localized::new(
            vec![
                S::text(
                    "강박사고와 강박행동",
                    &["강박사고는 반복적으로 떠오르는 원치 않는 생각이며, 강박행동은 그로 인한 불안을 줄이기 위해 반복하는 행동입니다. 행동은 잠시 안도감을 주지만 악순환을 강화합니다."],
                ),
                S::list(
                    "치료 방법",
                    Numbered,
                    &["노출 및 반응 방지(ERP) 치료", "약물 치료(SSRI)", "가족 교육과 지지"],
                ),
            ],
            vec![
                S::text(
                    "Obsessions and compulsions",
                    &["Obsessions are unwanted, recurring thoughts; compulsions are repeated behaviours performed to reduce the anxiety they cause. The relief is short-lived and strengthens the cycle."],
                ),
                S::list(
                    "Treatment options",
                    Numbered,
                    &["Exposure and response prevention (ERP)", "Medication (SSRIs)", "Family education and support"],
                ),
            ],
            vec![
                S::text(
                    "強迫観念と強迫行為",
                    &["強迫観念とは繰り返し浮かぶ望まない考えで、強迫行為はそれによる不安を和らげるために繰り返す行動です。安心感は一時的で、悪循環を強めてしまいます。"],
                ),
                S::list(
                    "治療法",
                    Numbered,
                    &["曝露反応妨害法（ERP）", "薬物療法（SSRI）", "家族への心理教育とサポート"],
                ),
            ],
            vec![
                S::text(
                    "强迫思维与强迫行为",
                    &["强迫思维是反复出现的不想要的念头，强迫行为是为减轻由此产生的焦虑而重复的行为。这种缓解是短暂的，反而会强化恶性循环。"],
                ),
                S::list(
                    "治疗方法",
                    Numbered,
                    &["暴露与反应预防（ERP）", "药物治疗（SSRI）", "家庭教育与支持"],
                ),
            ],
        ),
        read_time: 5,
        tags: tags(&["ocd", "anxiety"]),
        sources: vec![source(
            "Obsessive-Compulsive Disorder",
            "National Institute of Mental Health",
            "https://www.nimh.nih.gov/health/topics/obsessive-compulsive-disorder-ocd",
            date(2024, 3, 10),
        )],
        last_updated: date(2024, 3, 12),
        featured: None,
        recommended_products: None,
    }
}

fn stress_management() -> Article {
    Article {
        id: "stress-management-techniques".to_string(),
        category: Category::Management,
        title: Localized::text(
            "일상에서 실천하는 스트레스 관리법",
            "Everyday Stress Management Techniques",
            "日常でできるストレス管理法",
            "日常压力管理技巧",
        ),
        summary: Localized::text(
            "호흡, 운동, 생각 정리까지 오늘부터 시작할 수 있는 스트레스 관리 방법입니다.",
            "From breathing to exercise to journaling: stress techniques you can start today.",
            "呼吸、運動、思考の整理まで、今日から始められるストレス管理法です。",
            "从呼吸、运动到书写整理思绪，今天就能开始的压力管理方法。",
        ),
        content: Localized::new(
            vec![
                S::list(
                    "4-7-8 호흡법",
                    Numbered,
                    &["4초 동안 코로 숨을 들이쉽니다", "7초 동안 숨을 참습니다", "8초 동안 입으로 천천히 내쉽니다", "이 과정을 네 번 반복합니다"],
                ),
                S::text(
                    "몸을 움직이세요",
                    &["하루 30분의 가벼운 유산소 운동은 스트레스 호르몬을 줄이고 기분을 개선하는 데 도움이 됩니다."],
                ),
            ],
            vec![
                S::list(
                    "4-7-8 breathing",
                    Numbered,
                    &["Breathe in through your nose for 4 seconds", "Hold your breath for 7 seconds", "Exhale slowly through your mouth for 8 seconds", "Repeat the cycle four times"],
                ),
                S::text(
                    "Move your body",
                    &["Thirty minutes of light aerobic exercise a day helps lower stress hormones and lift your mood."],
                ),
            ],
            vec![
                S::list(
                    "4-7-8呼吸法",
                    Numbered,
                    &["鼻から4秒かけて息を吸う", "7秒間息を止める", "口から8秒かけてゆっくり吐く", "これを4回繰り返す"],
                ),
                S::text(
                    "体を動かしましょう",
                    &["1日30分の軽い有酸素運動は、ストレスホルモンを減らし気分を改善するのに役立ちます。"],
                ),
            ],
            vec![
                S::list(
                    "4-7-8呼吸法",
                    Numbered,
                    &["用鼻子吸气4秒", "屏住呼吸7秒", "用嘴缓慢呼气8秒", "重复四次"],
                ),
                S::text(
                    "动起来",
                    &["每天30分钟的轻度有氧运动有助于降低压力激素并改善情绪。"],
                ),
            ],
        ),
        read_time: 5,
        tags: tags(&["stress", "breathing", "exercise", "self-care"]),
        sources: vec![source(
            "Manage Stress",
            "U.S. Department of Health and Human Services",
            "https://health.gov/myhealthfinder/health-conditions/heart-health/manage-stress",
            date(2024, 4, 1),
        )],
        last_updated: date(2024, 4, 3),
        featured: Some(true),
        recommended_products: Some(vec![
            RecommendedProduct {
                title: Localized::text(
                    "마음챙김 명상 입문서",
                    "Mindfulness Meditation for Beginners",
                    "マインドフルネス瞑想入門",
                    "正念冥想入门",
                ),
                description: Localized::text(
                    "하루 10분으로 시작하는 명상 안내서",
                    "A guide to meditation in ten minutes a day",
                    "1日10分から始める瞑想ガイド",
                    "每天十分钟的冥想指南",
                ),
                price: 16800.0,
                affiliate: Affiliate::Coupang,
                link: "https://link.coupang.com/a/mindfulness-book".to_string(),
                image_url: "/images/products/mindfulness-book.jpg".to_string(),
                category: ProductCategory::Book,
            },
            RecommendedProduct {
                title: Localized::text(
                    "호흡 훈련 기기",
                    "Breathing Trainer",
                    "呼吸トレーナー",
                    "呼吸训练器",
                ),
                description: Localized::text(
                    "진동으로 호흡 리듬을 안내하는 휴대용 기기",
                    "A pocket device that paces your breathing with gentle vibration",
                    "振動で呼吸のリズムを導く携帯デバイス",
                    "通过轻柔振动引导呼吸节奏的便携设备",
                ),
                price: 39.99,
                affiliate: Affiliate::Amazon,
                link: "https://www.amazon.com/dp/breathing-trainer".to_string(),
                image_url: "/images/products/breathing-trainer.jpg".to_string(),
                category: ProductCategory::Device,
            },
        ]),
    }
}

fn sleep_and_mood() -> Article {
    Article {
        id: "sleep-and-mental-health".to_string(),
        category: Category::Lifestyle,
        title: Localized::text(
            "수면과 정신건강",
            "Sleep and Mental Health",
            "睡眠とメンタルヘルス",
            "睡眠与心理健康",
        ),
        summary: Localized::text(
            "잠이 부족하면 기분도 흔들립니다. 숙면을 위한 생활 습관을 알아보세요.",
            "Poor sleep shakes your mood. Habits that support restful sleep.",
            "睡眠不足は気分も揺さぶります。よく眠るための生活習慣を紹介します。",
            "睡眠不足会影响情绪。了解有助于安眠的生活习惯。",
        ),
        content: Localized::new(
            vec![S::list(
                "수면 위생 수칙",
                Bullet,
                &["매일 같은 시간에 자고 일어나기", "잠들기 한 시간 전 화면 멀리하기", "오후에는 카페인 피하기", "침실은 어둡고 서늘하게 유지하기"],
            )],
            vec![S::list(
                "Sleep hygiene basics",
                Bullet,
                &["Go to bed and wake up at the same time every day", "Put screens away an hour before bed", "Avoid caffeine in the afternoon", "Keep the bedroom dark and cool"],
            )],
            vec![S::list(
                "睡眠衛生の基本",
                Bullet,
                &["毎日同じ時間に寝て起きる", "寝る1時間前には画面から離れる", "午後はカフェインを控える", "寝室は暗く涼しく保つ"],
            )],
            vec![S::list(
                "睡眠卫生要点",
                Bullet,
                &["每天在同一时间睡觉和起床", "睡前一小时远离屏幕", "下午避免摄入咖啡因", "保持卧室黑暗凉爽"],
            )],
        ),
        read_time: 3,
        tags: tags(&["sleep", "lifestyle", "self-care"]),
        sources: vec![source(
            "Sleep and Mental Health",
            "Harvard Health Publishing",
            "https://www.health.harvard.edu/newsletter_article/sleep-and-mental-health",
            date(2024, 4, 20),
        )],
        last_updated: date(2024, 4, 22),
        featured: None,
        recommended_products: Some(vec![RecommendedProduct {
            title: Localized::text("마그네슘 보충제", "Magnesium Glycinate", "マグネシウム サプリメント", "甘氨酸镁补充剂"),
            description: Localized::text(
                "복용 전 전문가와 상담하세요",
                "Talk to a professional before taking supplements",
                "服用前に専門家に相談してください",
                "服用前请咨询专业人士",
            ),
            price: 18.5,
            affiliate: Affiliate::Iherb,
            link: "https://www.iherb.com/pr/magnesium-glycinate".to_string(),
            image_url: "/images/products/magnesium.jpg".to_string(),
            category: ProductCategory::Supplement,
        }]),
    }
}

fn supporting_a_loved_one() -> Article {
    Article {
        id: "supporting-a-loved-one".to_string(),
        category: Category::Relationships,
        title: Localized::text(
            "힘들어하는 가족과 친구를 돕는 법",
            "How to Support a Struggling Loved One",
            "つらい思いをしている家族や友人を支える方法",
            "如何支持正在经历困难的亲友",
        ),
        summary: Localized::text(
            "조언보다 경청이 먼저입니다. 소중한 사람을 지지하는 대화법을 소개합니다.",
            "Listening comes before advice. Ways to talk with someone you care about.",
            "助言より傾聴が先です。大切な人を支える会話のコツを紹介します。",
            "倾听先于建议。介绍支持身边重要之人的沟通方式。",
        ),
        content: Localized::new(
            vec![
                S::text(
                    "판단하지 말고 들어주세요",
                    &["\"힘내\"라는 말보다 \"많이 힘들었겠다\"라는 공감이 더 큰 힘이 됩니다."],
                ),
                S::text(
                    "위기 상황이라면",
                    &["자해나 자살에 대한 이야기를 한다면 혼자 두지 말고 즉시 자살예방상담전화 109 또는 119에 연락하세요."],
                ),
            ],
            vec![
                S::text(
                    "Listen without judging",
                    &["\"That sounds really hard\" often helps more than \"cheer up\"."],
                ),
                S::text(
                    "In a crisis",
                    &["If they talk about self-harm or suicide, do not leave them alone and contact a crisis line or emergency services right away."],
                ),
            ],
            vec![
                S::text(
                    "否定せずに耳を傾ける",
                    &["「頑張って」よりも「本当に大変だったね」という共感のほうが力になります。"],
                ),
                S::text(
                    "危機的な状況では",
                    &["自傷や自殺について話している場合は一人にせず、すぐに相談窓口や救急に連絡してください。"],
                ),
            ],
            vec![
                S::text(
                    "不加评判地倾听",
                    &["比起\"加油\"，\"这一定很不容易\"这样的共情往往更有帮助。"],
                ),
                S::text(
                    "遇到危机时",
                    &["如果对方谈及自伤或自杀，请不要让其独处，并立即联系心理危机热线或急救服务。"],
                ),
            ],
        ),
        read_time: 4,
        tags: tags(&["relationships", "support", "crisis"]),
        sources: vec![source(
            "For Friends and Family Members",
            "Substance Abuse and Mental Health Services Administration",
            "https://www.samhsa.gov/mental-health/how-to-talk/friends-and-family-members",
            date(2024, 5, 5),
        )],
        last_updated: date(2024, 5, 6),
        featured: None,
        recommended_products: None,
    }
}

fn workplace_burnout() -> Article {
    Article {
        id: "workplace-burnout".to_string(),
        category: Category::Workplace,
        title: Localized::text(
            "직장인 번아웃 신호와 대처법",
            "Recognizing and Handling Burnout at Work",
            "職場のバーンアウト：サインと対処法",
            "职场倦怠的信号与应对",
        ),
        summary: Localized::text(
            "번아웃은 개인의 나약함이 아닌 만성적 업무 스트레스의 결과입니다.",
            "Burnout is the result of chronic workplace stress, not personal weakness.",
            "バーンアウトは個人の弱さではなく、慢性的な職場ストレスの結果です。",
            "职业倦怠不是个人软弱，而是长期工作压力的结果。",
        ),
        content: Localized::new(
            vec![
                S::list(
                    "번아웃의 세 가지 차원",
                    Bullet,
                    &["에너지 고갈과 탈진", "업무에 대한 냉소와 거리감", "업무 효능감 저하"],
                ),
                S::text(
                    "회복을 위한 첫걸음",
                    &["업무와 휴식의 경계를 정하고, 관리자와 업무량에 대해 솔직하게 이야기해 보세요."],
                ),
            ],
            vec![
                S::list(
                    "Three dimensions of burnout",
                    Bullet,
                    &["Energy depletion and exhaustion", "Cynicism and distance from one's job", "Reduced professional efficacy"],
                ),
                S::text(
                    "First steps to recovery",
                    &["Set boundaries between work and rest, and talk openly with your manager about workload."],
                ),
            ],
            vec![
                S::list(
                    "バーンアウトの3つの側面",
                    Bullet,
                    &["エネルギーの枯渇と疲弊", "仕事への冷笑的な態度と距離感", "職務効力感の低下"],
                ),
                S::text(
                    "回復への第一歩",
                    &["仕事と休息の境界を決め、業務量について上司と率直に話してみましょう。"],
                ),
            ],
            vec![
                S::list(
                    "职业倦怠的三个维度",
                    Bullet,
                    &["精力耗竭", "对工作的冷漠与疏离", "职业效能感下降"],
                ),
                S::text(
                    "迈向恢复的第一步",
                    &["划清工作与休息的界限，并与上司坦诚沟通工作量。"],
                ),
            ],
        ),
        read_time: 5,
        tags: tags(&["burnout", "work", "stress"]),
        sources: vec![source(
            "Burn-out an \"occupational phenomenon\"",
            "World Health Organization",
            "https://www.who.int/news/item/28-05-2019-burn-out-an-occupational-phenomenon-international-classification-of-diseases",
            date(2024, 5, 20),
        )],
        last_updated: date(2024, 5, 21),
        featured: None,
        recommended_products: None,
    }
}
