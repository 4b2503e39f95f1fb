//! Bundled marketing content: student results, testimonials, section anchors.

use crate::i18n;
use crate::locale::Language;

/// A certificate result in the student results carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSlide {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    /// Certificate and band, e.g. `IELTS 7.0` or `CEFR C1`.
    pub course: &'static str,
}

macro_rules! slide {
    ($id:expr, $name:expr, $file:expr, $course:expr) => {
        ResultSlide {
            id: $id,
            name: $name,
            image: concat!("assets/aim/", $file, ".webp"),
            course: $course,
        }
    };
}

pub const RESULT_SLIDES: &[ResultSlide] = &[
    slide!(1, "Abdumajidov Sodiqjon", "Abdumajidov_Sodiqjon", "IELTS 5.5"),
    slide!(2, "Andrey Kim", "Andrey_Kim", "CEFR C1"),
    slide!(3, "Asalxon Amirqulova", "Asalxon_Amirqulova", "IELTS 6.5"),
    slide!(4, "Bexruz Mansurov", "Bexruz_Mansurov", "IELTS 7.0"),
    slide!(5, "Damir Zagrudinov", "Damir_Zagrudinov", "IELTS 6.5"),
    slide!(6, "Diana Garapshina", "Diana_Garapshina", "IELTS 7.0"),
    slide!(7, "Jalolova Zarina", "Jalolova_Zarina", "IELTS 6.0"),
    slide!(8, "Kamronbek Farxodzoda", "Kamronbek_Farxodzoda", "IELTS 6.5"),
    slide!(9, "Kim Andrey", "Kim_Andrey", "IELTS 7.0"),
    slide!(10, "Li Viktor", "Li_Viktor", "IELTS 7.0"),
    slide!(11, "Madinabonu Fayzakhmatova", "Madinabonu_Fayzakhmatova", "IELTS 6.0"),
    slide!(12, "Niyazov Alixan", "Niyazov_Alixan", "IELTS 6.5"),
    slide!(13, "Samiriddin Nizomxo'jayev", "Samiriddin_Nizomxojayev", "CEFR C1"),
    slide!(14, "Sevinch Shavkatova", "Sevinch_Shavkatova", "IELTS 8.5"),
    slide!(15, "Sodiqjon Abdumajidov", "Sodiqjon_Abdumajidov", "CEFR B2"),
    slide!(16, "Yusuf Avazov", "Yusuf_Avazov", "IELTS 8.0"),
    slide!(17, "Zebo Sultonova", "Zebo_Ielts_Sultonova", "IELTS 6.5"),
    slide!(18, "Zebo Sultonova", "Zebo_Sultonova", "CEFR C1"),
    slide!(19, "Zilola Umarova", "Zilola_Umarova", "IELTS 6.5"),
    slide!(20, "Saidov Feruz", "Saidov_Firuz", "IELTS 7.0"),
    slide!(21, "Amirov Kodir", "Amirov_Kodir", "IELTS 6.0"),
    slide!(22, "Sharipova Xonzodabegim", "Sharipova_Xonzodabegim", "IELTS 6.0"),
    slide!(23, "Toshkoriev Mukhammadjon", "Toshkoriev_Mukhammadjon", "IELTS 6.0"),
];

/// Person quoted in the testimonials carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reviewer {
    pub name: &'static str,
    pub age: &'static str,
    pub avatar: &'static str,
}

pub const REVIEWERS: &[Reviewer] = &[
    Reviewer { name: "Abdumajidov Sodiqjon", age: "19 yosh", avatar: "assets/comments/image-1.webp" },
    Reviewer { name: "Shavkatova Sevinch", age: "18 yosh", avatar: "assets/comments/image-2.webp" },
    Reviewer { name: "Sultonova Zebo", age: "20 yosh", avatar: "assets/comments/image-3.webp" },
    Reviewer { name: "Амириддинова Наргиза", age: "16 ёш", avatar: "assets/comments/image-4.webp" },
    Reviewer { name: "Firuz", age: "26 yosh", avatar: "assets/comments/image-5.webp" },
    Reviewer { name: "Ниязов Алихан", age: "18 ёш", avatar: "assets/comments/image-6.webp" },
    Reviewer { name: "Kamalov Khusan", age: "23 yosh", avatar: "assets/comments/image-7.webp" },
    Reviewer { name: "Garapshina Diana", age: "16 yosh", avatar: "assets/comments/image-8.webp" },
    Reviewer { name: "Avazov Yusuf", age: "20 yosh", avatar: "assets/comments/image-9.webp" },
    Reviewer { name: "Akhmedova Malika", age: "22 yosh", avatar: "assets/comments/image-10.webp" },
    Reviewer { name: "Abdumannopova Malika", age: "16 yosh", avatar: "assets/comments/image-11.webp" },
];

/// Course tags cycled over the testimonials.
pub const REVIEW_TAGS: &[&str] = &[
    "Beginner",
    "Intermediate",
    "Upper Intermediate",
    "IELTS Preparation",
    "TOEFL Preparation",
    "Advanced",
];

/// Testimonials per carousel page (two rows of three).
pub const REVIEWS_PER_PAGE: usize = 6;
/// Testimonials shown in total; the list is repeated to reach it.
pub const REVIEWS_SHOWN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: usize,
    pub reviewer: Reviewer,
    pub rating: u8,
    pub text: &'static str,
    pub course: &'static str,
}

/// Testimonials for `lang`: review texts and course tags are cycled over the
/// reviewers.
pub fn reviews(lang: Language) -> Vec<Review> {
    let texts = i18n::review_texts(lang);
    REVIEWERS
        .iter()
        .enumerate()
        .map(|(i, reviewer)| Review {
            id: i + 1,
            reviewer: *reviewer,
            rating: 5,
            text: texts[i % texts.len()],
            course: REVIEW_TAGS[i % REVIEW_TAGS.len()],
        })
        .collect()
}

/// In-page anchors reachable from the header and footer, with their i18n keys.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("results", "nav_results"),
    ("reviews", "nav_reviews"),
    ("contact", "nav_contact"),
    ("courses", "nav_courses"),
];

/// Headline figures of the stats strip: value and i18n key of the caption.
pub const STATS: &[(&str, &str)] = &[
    ("3,000+", "stat_students"),
    ("17+", "stat_years"),
    ("6.0–8.5", "stat_ielts"),
];

pub const PHONE_DISPLAY: &str = "+998 (90) 499-5000";
pub const PHONE_HREF: &str = "tel:+998904995000";
pub const SUPPORT_HOURS: &str = "9:00 AM - 8:00 PM";
pub const SUPPORT_EMAIL: &str = "support@lingup.com";
pub const TELEGRAM_URL: &str = "https://t.me/lingup_admin";
pub const TELEGRAM_HANDLE: &str = "@lingup_admin";

/// Social links in the footer: (label, url).
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://www.facebook.com/profile.php?id=61558797356892"),
    ("Instagram", "https://www.instagram.com/lingup_uz/"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_have_unique_ids_and_images() {
        assert_eq!(RESULT_SLIDES.len(), 23);
        let mut ids: Vec<u32> = RESULT_SLIDES.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 23);
        assert!(RESULT_SLIDES.iter().all(|s| s.image.ends_with(".webp")));
    }

    #[test]
    fn reviews_cycle_texts_and_tags() {
        for lang in Language::ALL {
            let list = reviews(lang);
            assert_eq!(list.len(), REVIEWERS.len());
            assert_eq!(list[6].course, REVIEW_TAGS[0]);
            assert!(list.iter().all(|r| r.rating == 5 && !r.text.is_empty()));
        }
    }
}
