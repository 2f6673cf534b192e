//! Static localized content served when the model is unavailable or fails.
//!
//! Templates carry `{weeks}` and `{days}` placeholders; every other field is
//! fixed text.

use crate::models::{DevelopmentResponse, Exercise, ExerciseResponse, GestationParams, Language};

struct DevelopmentTemplate {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    length: &'static str,
    weight: &'static str,
    comparison: &'static str,
    developments: [&'static str; 4],
}

struct ExerciseTemplate {
    emoji: &'static str,
    name: &'static str,
    description: &'static str,
    benefits: &'static str,
}

struct ExercisePlanTemplate {
    intro: &'static str,
    exercises: [ExerciseTemplate; 4],
}

static DEVELOPMENT_EN: DevelopmentTemplate = DevelopmentTemplate {
    icon: "👶",
    title: "Week {weeks}: Baby Development",
    description: "At {weeks} weeks and {days} days, your baby is growing and developing rapidly. Each week brings new milestones!",
    length: "Varies",
    weight: "Varies",
    comparison: "🤱 Growing strong",
    developments: [
        "Organs are developing and maturing",
        "Brain is forming neural connections",
        "Baby is active and growing",
        "Preparing for life outside the womb",
    ],
};

static DEVELOPMENT_HI: DevelopmentTemplate = DevelopmentTemplate {
    icon: "👶",
    title: "सप्ताह {weeks}: बच्चे का विकास",
    description: "{weeks} सप्ताह और {days} दिन पर, आपका बच्चा तेजी से बढ़ रहा है और विकसित हो रहा है। प्रत्येक सप्ताह नए मील के पत्थर लाता है!",
    length: "भिन्न होता है",
    weight: "भिन्न होता है",
    comparison: "🤱 मजबूत हो रहा है",
    developments: [
        "अंग विकसित और परिपक्व हो रहे हैं",
        "मस्तिष्क तंत्रिका कनेक्शन बना रहा है",
        "बच्चा सक्रिय है और बढ़ रहा है",
        "गर्भ के बाहर जीवन के लिए तैयारी कर रहा है",
    ],
};

static DEVELOPMENT_AR: DevelopmentTemplate = DevelopmentTemplate {
    icon: "👶",
    title: "الأسبوع {weeks}: نمو الطفل",
    description: "في {weeks} أسبوعًا و {days} أيام، ينمو طفلك ويتطور بسرعة. كل أسبوع يجلب معالم جديدة!",
    length: "يختلف",
    weight: "يختلف",
    comparison: "🤱 ينمو بقوة",
    developments: [
        "الأعضاء تتطور وتنضج",
        "الدماغ يشكل الروابط العصبية",
        "الطفل نشط وينمو",
        "يستعد للحياة خارج الرحم",
    ],
};

static DEVELOPMENT_UR: DevelopmentTemplate = DevelopmentTemplate {
    icon: "👶",
    title: "ہفتہ {weeks}: بچے کی نشوونما",
    description: "{weeks} ہفتے اور {days} دن پر، آپ کا بچہ تیزی سے بڑھ رہا ہے اور ترقی کر رہا ہے۔ ہر ہفتہ نئے سنگ میل لاتا ہے!",
    length: "مختلف ہوتا ہے",
    weight: "مختلف ہوتا ہے",
    comparison: "🤱 مضبوط ہو رہا ہے",
    developments: [
        "اعضاء ترقی اور پختہ ہو رہے ہیں",
        "دماغ اعصابی روابط بنا رہا ہے",
        "بچہ فعال ہے اور بڑھ رہا ہے",
        "رحم سے باہر زندگی کے لیے تیاری کر رہا ہے",
    ],
};

static EXERCISES_EN: ExercisePlanTemplate = ExercisePlanTemplate {
    intro: "At {weeks} weeks, gentle exercise is beneficial for both you and your baby. Here are some safe activities recommended for this stage of pregnancy.",
    exercises: [
        ExerciseTemplate {
            emoji: "🚶‍♀️",
            name: "Walking",
            description: "Walk at a comfortable pace for 20-30 minutes daily.",
            benefits: "Improves circulation, maintains fitness, and is safe throughout pregnancy.",
        },
        ExerciseTemplate {
            emoji: "🧘‍♀️",
            name: "Prenatal Yoga",
            description: "Gentle stretches and breathing exercises designed for pregnancy.",
            benefits: "Reduces stress, improves flexibility, and helps with breathing during labor.",
        },
        ExerciseTemplate {
            emoji: "🏊‍♀️",
            name: "Swimming",
            description: "Swim or do water aerobics in a comfortable temperature pool.",
            benefits: "Low-impact exercise that supports your weight and reduces swelling.",
        },
        ExerciseTemplate {
            emoji: "💪",
            name: "Pelvic Floor Exercises",
            description: "Practice Kegel exercises by tightening pelvic muscles for 5-10 seconds.",
            benefits: "Strengthens muscles for labor and recovery, prevents incontinence.",
        },
    ],
};

static EXERCISES_HI: ExercisePlanTemplate = ExercisePlanTemplate {
    intro: "{weeks} सप्ताह में, हल्का व्यायाम आपके और आपके बच्चे दोनों के लिए लाभदायक है। यहां गर्भावस्था के इस चरण के लिए कुछ सुरक्षित गतिविधियां दी गई हैं।",
    exercises: [
        ExerciseTemplate {
            emoji: "🚶‍♀️",
            name: "चलना",
            description: "आरामदायक गति से प्रतिदिन 20-30 मिनट चलें।",
            benefits: "रक्त संचार में सुधार, फिटनेस बनाए रखना, और पूरी गर्भावस्था में सुरक्षित।",
        },
        ExerciseTemplate {
            emoji: "🧘‍♀️",
            name: "प्रसव पूर्व योग",
            description: "गर्भावस्था के लिए डिज़ाइन किए गए कोमल खिंचाव और श्वास व्यायाम।",
            benefits: "तनाव कम करता है, लचीलापन बढ़ाता है, और प्रसव के दौरान श्वास में मदद करता है।",
        },
        ExerciseTemplate {
            emoji: "🏊‍♀️",
            name: "तैराकी",
            description: "आरामदायक तापमान वाले पूल में तैराकी या वाटर एरोबिक्स करें।",
            benefits: "कम प्रभाव वाला व्यायाम जो आपके वजन का समर्थन करता है और सूजन कम करता है।",
        },
        ExerciseTemplate {
            emoji: "💪",
            name: "पेल्विक फ्लोर व्यायाम",
            description: "श्रोणि की मांसपेशियों को 5-10 सेकंड के लिए कसकर केगेल व्यायाम का अभ्यास करें।",
            benefits: "प्रसव और रिकवरी के लिए मांसपेशियों को मजबूत करता है, असंयम को रोकता है।",
        },
    ],
};

static EXERCISES_AR: ExercisePlanTemplate = ExercisePlanTemplate {
    intro: "في الأسبوع {weeks}، التمارين اللطيفة مفيدة لك ولطفلك. إليك بعض الأنشطة الآمنة الموصى بها لهذه المرحلة من الحمل.",
    exercises: [
        ExerciseTemplate {
            emoji: "🚶‍♀️",
            name: "المشي",
            description: "امشي بوتيرة مريحة لمدة 20-30 دقيقة يومياً.",
            benefits: "يحسن الدورة الدموية، يحافظ على اللياقة، وآمن طوال فترة الحمل.",
        },
        ExerciseTemplate {
            emoji: "🧘‍♀️",
            name: "يوغا ما قبل الولادة",
            description: "تمارين التمدد اللطيفة والتنفس المصممة للحمل.",
            benefits: "يقلل التوتر، يحسن المرونة، ويساعد في التنفس أثناء المخاض.",
        },
        ExerciseTemplate {
            emoji: "🏊‍♀️",
            name: "السباحة",
            description: "اسبحي أو مارسي التمارين المائية في مسبح بدرجة حرارة مريحة.",
            benefits: "تمرين منخفض التأثير يدعم وزنك ويقلل التورم.",
        },
        ExerciseTemplate {
            emoji: "💪",
            name: "تمارين قاع الحوض",
            description: "مارسي تمارين كيجل من خلال شد عضلات الحوض لمدة 5-10 ثوانٍ.",
            benefits: "يقوي العضلات للمخاض والتعافي، يمنع سلس البول.",
        },
    ],
};

static EXERCISES_UR: ExercisePlanTemplate = ExercisePlanTemplate {
    intro: "{weeks} ہفتے میں، ہلکی ورزش آپ اور آپ کے بچے دونوں کے لیے فائدہ مند ہے۔ یہاں حمل کے اس مرحلے کے لیے کچھ محفوظ سرگرمیاں ہیں۔",
    exercises: [
        ExerciseTemplate {
            emoji: "🚶‍♀️",
            name: "چلنا",
            description: "روزانہ 20-30 منٹ آرام دہ رفتار سے چلیں۔",
            benefits: "خون کی گردش بہتر بناتا ہے، تندرستی برقرار رکھتا ہے، اور پوری حمل میں محفوظ ہے۔",
        },
        ExerciseTemplate {
            emoji: "🧘‍♀️",
            name: "زچگی سے پہلے یوگا",
            description: "حمل کے لیے ڈیزائن کیے گئے نرم کھینچاؤ اور سانس کی مشقیں۔",
            benefits: "تناؤ کم کرتا ہے، لچک بڑھاتا ہے، اور زچگی کے دوران سانس لینے میں مدد کرتا ہے۔",
        },
        ExerciseTemplate {
            emoji: "🏊‍♀️",
            name: "تیراکی",
            description: "آرام دہ درجہ حرارت والے پول میں تیراکی یا واٹر ایروبکس کریں۔",
            benefits: "کم اثر والی ورزش جو آپ کے وزن کو سہارا دیتی ہے اور سوجن کم کرتی ہے۔",
        },
        ExerciseTemplate {
            emoji: "💪",
            name: "پیلوک فلور ورزشیں",
            description: "شرونی کے پٹھوں کو 5-10 سیکنڈ تک سخت کرکے کیگل ورزش کی مشق کریں۔",
            benefits: "زچگی اور بحالی کے لیے پٹھوں کو مضبوط بناتا ہے، پیشاب کی بے ضابطگی سے بچاتا ہے۔",
        },
    ],
};

fn development_template(language: Language) -> &'static DevelopmentTemplate {
    match language {
        Language::En => &DEVELOPMENT_EN,
        Language::Hi => &DEVELOPMENT_HI,
        Language::Ar => &DEVELOPMENT_AR,
        Language::Ur => &DEVELOPMENT_UR,
    }
}

fn exercise_template(language: Language) -> &'static ExercisePlanTemplate {
    match language {
        Language::En => &EXERCISES_EN,
        Language::Hi => &EXERCISES_HI,
        Language::Ar => &EXERCISES_AR,
        Language::Ur => &EXERCISES_UR,
    }
}

fn interpolate(template: &str, params: &GestationParams) -> String {
    template
        .replace("{weeks}", &params.weeks.to_string())
        .replace("{days}", &params.days_or_zero().to_string())
}

pub fn development_fallback(params: &GestationParams) -> DevelopmentResponse {
    let template = development_template(params.language());

    DevelopmentResponse {
        icon: template.icon.to_string(),
        length: template.length.to_string(),
        weight: template.weight.to_string(),
        comparison: template.comparison.to_string(),
        title: interpolate(template.title, params),
        description: interpolate(template.description, params),
        developments: template.developments.iter().map(|d| d.to_string()).collect(),
    }
}

pub fn exercise_fallback(params: &GestationParams) -> ExerciseResponse {
    let template = exercise_template(params.language());

    ExerciseResponse {
        intro: interpolate(template.intro, params),
        exercises: template
            .exercises
            .iter()
            .map(|e| Exercise {
                name: e.name.to_string(),
                emoji: e.emoji.to_string(),
                description: e.description.to_string(),
                benefits: e.benefits.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_development_interpolates_weeks_and_days() {
        let response = development_fallback(&GestationParams::new(20, 3, "en"));
        assert_eq!(response.title, "Week 20: Baby Development");
        assert!(response.description.starts_with("At 20 weeks and 3 days,"));
        assert_eq!(response.developments.len(), 4);
        assert_eq!(response.length, "Varies");
    }

    #[test]
    fn arabic_development_uses_arabic_template() {
        let response = development_fallback(&GestationParams::new(42, 0, "ar"));
        assert_eq!(response.title, "الأسبوع 42: نمو الطفل");
        assert!(response.description.contains("في 42 أسبوعًا و 0 أيام"));
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let response = development_fallback(&GestationParams::new(10, 1, "fr"));
        assert_eq!(response, development_fallback(&GestationParams::new(10, 1, "en")));

        let plan = exercise_fallback(&GestationParams::new(10, 1, "zz"));
        assert_eq!(plan.exercises[0].name, "Walking");
    }

    #[test]
    fn no_placeholder_survives_interpolation() {
        for code in ["en", "hi", "ar", "ur"] {
            let params = GestationParams::new(7, 5, code);
            let dev = serde_json::to_string(&development_fallback(&params)).unwrap();
            let ex = serde_json::to_string(&exercise_fallback(&params)).unwrap();
            assert!(!dev.contains("{weeks}") && !dev.contains("{days}"), "{code}");
            assert!(!ex.contains("{weeks}"), "{code}");
            assert!(dev.contains('7'));
        }
    }

    #[test]
    fn exercise_intro_mentions_weeks_only() {
        let plan = exercise_fallback(&GestationParams::new(28, 6, "ur"));
        assert!(plan.intro.starts_with("28 ہفتے میں"));
        assert!(!plan.intro.contains('6'));
        assert_eq!(plan.exercises.len(), 4);
    }
}
