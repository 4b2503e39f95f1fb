//! Static UI translations.
//!
//! Keys are plain snake_case strings; an unknown key is returned as-is so a
//! missing translation shows up on the page instead of an empty string.

use crate::locale::Language;

/// `(key, [uz, ru, en])`
const ENTRIES: &[(&str, [&str; 3])] = &[
    // header
    ("nav_results", ["Natijalar", "Результаты", "Results"]),
    ("nav_reviews", ["Fikrlar", "Отзывы", "Reviews"]),
    ("nav_contact", ["Aloqa", "Контакты", "Contact"]),
    ("nav_courses", ["Kurslar", "Курсы", "Courses"]),
    ("start_learning", ["O'qishni boshlash", "Начать обучение", "Start learning"]),
    ("toggle_menu", ["Menyuni ochish", "Открыть меню", "Toggle menu"]),
    // hero
    ("hero_badge", ["Ingliz tili markazi", "Центр английского языка", "English language centre"]),
    ("hero_title", ["Ingliz tilini", "Выучите английский", "Learn English"]),
    ("hero_title_accent", ["natija bilan o'rganing", "с гарантией результата", "with real results"]),
    (
        "hero_description",
        [
            "IELTS va CEFR imtihonlariga tajribali ustozlar bilan tayyorlaning. Kichik guruhlar, jonli darslar va har hafta nazorat.",
            "Подготовка к IELTS и CEFR с опытными преподавателями. Небольшие группы, живые уроки и еженедельный контроль.",
            "Prepare for IELTS and CEFR with experienced teachers. Small groups, live lessons and weekly progress checks.",
        ],
    ),
    ("hero_cta", ["Kursni tanlash", "Выбрать курс", "Choose a course"]),
    ("hero_secondary_cta", ["Bepul maslahat", "Бесплатная консультация", "Free consultation"]),
    // stats
    ("stat_students", ["O'quvchilar", "Студентов", "Students"]),
    ("stat_years", ["Yillik tajriba", "Лет опыта", "Years of experience"]),
    ("stat_ielts", ["IELTS natijalari", "Результаты IELTS", "IELTS results"]),
    // results
    ("results_eyebrow", ["O'quvchilar muvaffaqiyati", "Успехи студентов", "Student success stories"]),
    ("results_title", ["Bizning a'lo natijalarimiz", "Наши выдающиеся результаты", "Our outstanding students"]),
    (
        "results_description",
        [
            "O'quvchilarimizning yuqori natijalarga erishish yo'lini nishonlaymiz.",
            "Мы гордимся путём наших студентов к высоким результатам.",
            "Celebrating our students' remarkable journey to top scores.",
        ],
    ),
    ("close", ["Yopish", "Закрыть", "Close"]),
    ("previous", ["Oldingi", "Назад", "Previous"]),
    ("next", ["Keyingi", "Далее", "Next"]),
    // reviews
    ("reviews_eyebrow", ["Fikrlar", "Отзывы", "Testimonials"]),
    ("reviews_title", ["O'quvchilarimiz nima deydi", "Что говорят наши студенты", "What our students say"]),
    // contact
    ("get_in_touch", ["Biz bilan bog'laning", "Свяжитесь с нами", "Get in touch"]),
    (
        "have_questions",
        [
            "Savollaringiz bormi? Xabar qoldiring, tez orada javob beramiz.",
            "Есть вопросы? Оставьте сообщение, и мы скоро ответим.",
            "Have questions? Leave a message and we will get back to you soon.",
        ],
    ),
    ("send_us_message", ["Xabar yuboring", "Напишите нам", "Send us a message"]),
    ("we_will_reply_soon", ["Tez orada javob beramiz", "Мы скоро ответим", "We will reply soon"]),
    ("enter_full_name", ["To'liq ismingiz", "Ваше полное имя", "Your full name"]),
    ("enter_phone", ["Telefon raqamingiz", "Ваш номер телефона", "Your phone number"]),
    ("message", ["Xabar", "Сообщение", "Message"]),
    ("help_text", ["Sizga qanday yordam bera olamiz?", "Чем мы можем помочь?", "How can we help you?"]),
    ("send_message", ["Yuborish", "Отправить", "Send message"]),
    ("sending", ["Yuborilmoqda...", "Отправка...", "Sending..."]),
    (
        "thank_you_message",
        [
            "Rahmat! Xabaringiz qabul qilindi.",
            "Спасибо! Ваше сообщение получено.",
            "Thank you! Your message has been received.",
        ],
    ),
    (
        "phone_error",
        [
            "Telefon raqam 14 belgidan oshmasligi kerak",
            "Номер телефона не должен превышать 14 символов",
            "Phone number must not exceed 14 characters",
        ],
    ),
    ("hurry_places_are_limited", ["Shoshiling, joylar cheklangan", "Спешите, мест мало", "Hurry, places are limited"]),
    ("call_us", ["Qo'ng'iroq qiling", "Позвоните нам", "Call us"]),
    ("support_hours", ["Ish vaqti", "Часы работы", "Support hours"]),
    (
        "unexpected_error",
        [
            "Xatolik yuz berdi. Iltimos, qayta urinib ko'ring.",
            "Что-то пошло не так. Попробуйте ещё раз.",
            "Something went wrong. Please try again.",
        ],
    ),
    // courses
    ("choose_path", ["O'z yo'lingizni tanlang", "Выберите свой путь", "Choose your path"]),
    (
        "choose_path_description",
        [
            "Maqsadingizga mos tarifni tanlang va bugunoq boshlang.",
            "Выберите тариф под вашу цель и начните уже сегодня.",
            "Pick the plan that fits your goal and start today.",
        ],
    ),
    ("popular", ["Ommabop", "Популярный", "Popular"]),
    ("enroll_now", ["Hoziroq yoziling", "Записаться", "Enroll now"]),
    ("course_features", ["Kurs imkoniyatlari", "Что входит в курс", "Course features"]),
    ("students_suffix", ["o'quvchi", "студентов", "students"]),
    ("loading_courses", ["Kurslar yuklanmoqda...", "Загрузка курсов...", "Loading courses..."]),
    (
        "loading_courses_hint",
        [
            "Eng so'nggi ma'lumotlarni olib kelmoqdamiz",
            "Получаем актуальную информацию о курсах",
            "Please wait while we fetch the latest course information",
        ],
    ),
    ("courses_failed", ["Kurslarni yuklab bo'lmadi", "Не удалось загрузить курсы", "Failed to load courses"]),
    (
        "check_connection",
        [
            "Internet aloqangizni tekshirib, qayta urinib ko'ring",
            "Проверьте подключение к интернету и попробуйте снова",
            "Please check your internet connection and try again",
        ],
    ),
    // footer
    (
        "empowering",
        [
            "Til o'rganishni hamma uchun qulay va natijali qilamiz.",
            "Делаем изучение языков доступным и результативным.",
            "Empowering learners to reach fluency with confidence.",
        ],
    ),
    ("footer_courses", ["Kurslar", "Курсы", "Courses"]),
    ("footer_company", ["Kompaniya", "Компания", "Company"]),
    ("footer_contact", ["Aloqa", "Контакты", "Contact"]),
    ("rights_reserved", ["Barcha huquqlar himoyalangan.", "Все права защищены.", "All rights reserved."]),
    // order
    ("back_home", ["Asosiy sahifaga qaytish", "Вернуться на главную", "Back to home"]),
    ("course_price", ["Kurs narxi", "Стоимость курса", "Course price"]),
    ("plans_loading", ["Tariflar yuklanmoqda...", "Загрузка тарифов...", "Loading plans..."]),
    ("select_plan", ["Tarif tanlang", "Выберите тариф", "Choose a plan"]),
    ("selected_plan", ["Tanlangan tarif", "Выбранный тариф", "Selected plan"]),
    (
        "plans_failed",
        [
            "Tariflarni yuklab bo'lmadi. Iltimos, qayta urinib ko'ring.",
            "Не удалось загрузить тарифы. Попробуйте ещё раз.",
            "Could not load plans. Please try again.",
        ],
    ),
    (
        "pay_step_1",
        [
            "1. Quyidagi to'lov turlaridan biri orqali to'lovni amalga oshiring",
            "1. Оплатите одним из способов ниже",
            "1. Pay using one of the cards below",
        ],
    ),
    ("cards_loading", ["To'lov kartalari yuklanmoqda...", "Загрузка карт...", "Loading payment cards..."]),
    (
        "cards_failed",
        [
            "To'lov kartalarini yuklab bo'lmadi. Iltimos, qayta urinib ko'ring.",
            "Не удалось загрузить карты. Попробуйте ещё раз.",
            "Could not load payment cards. Please try again.",
        ],
    ),
    ("no_cards", ["Hozircha to'lov kartalari mavjud emas.", "Пока нет доступных карт.", "No payment cards available yet."]),
    ("copy", ["Nusxa olish", "Копировать", "Copy"]),
    ("copied", ["Nusxa olindi", "Скопировано", "Copied"]),
    (
        "pay_step_2",
        [
            "2. To'lovingiz muvaffaqiyatli amalga oshganini tasdiqlovchi rasmni saqlab oling (screenshot).",
            "2. Сохраните скриншот, подтверждающий успешную оплату.",
            "2. Save a screenshot confirming the payment went through.",
        ],
    ),
    (
        "pay_step_3",
        [
            "3. To'lovingiz rasmini yuklang va \"Davom etish\" tugmasini bosing.",
            "3. Загрузите скриншот и нажмите «Продолжить».",
            "3. Upload the screenshot and press \"Continue\".",
        ],
    ),
    (
        "payment_deadline",
        [
            "To'lov qilish muddati tugashiga oz qoldi:",
            "До окончания срока оплаты осталось:",
            "Time left to complete the payment:",
        ],
    ),
    ("full_name", ["To'liq ism", "Полное имя", "Full name"]),
    ("full_name_placeholder", ["Ismingizni kiriting", "Введите имя", "Enter your name"]),
    ("phone", ["Telefon raqam", "Номер телефона", "Phone number"]),
    ("telegram_username", ["Telegram username", "Telegram username", "Telegram username"]),
    ("upload_receipt", ["Chek rasmini yuklang", "Загрузите чек", "Upload the receipt"]),
    ("receipt_hint", ["PDF, PNG yoki JPG (maks. 5 MB)", "PDF, PNG или JPG (до 5 МБ)", "PDF, PNG or JPG (max 5 MB)"]),
    (
        "fill_all_fields",
        [
            "Iltimos, barcha maydonlarni to'ldiring va chek rasmini yuklang.",
            "Заполните все поля и загрузите чек.",
            "Please fill in every field and upload the receipt.",
        ],
    ),
    (
        "submit_failed",
        [
            "Tasdiqlash yuborilmadi. Iltimos, qayta urinib ko'ring.",
            "Не удалось отправить подтверждение. Попробуйте ещё раз.",
            "The confirmation was not sent. Please try again.",
        ],
    ),
    ("continue", ["Davom etish", "Продолжить", "Continue"]),
    ("need_help", ["Yordam kerakmi? Biz bilan bog'laning:", "Нужна помощь? Свяжитесь с нами:", "Need help? Contact us:"]),
    // success
    ("congrats", ["Tabriklaymiz!", "Поздравляем!", "Congratulations!"]),
    (
        "payment_received",
        [
            "To'lovingiz qabul qilindi. Yaqin vaqt ichida adminlarimiz siz bilan bog'lanishadi va barcha ma'lumotlarni taqdim etishadi.",
            "Ваша оплата принята. Наши администраторы скоро свяжутся с вами и всё расскажут.",
            "Your payment has been received. Our admins will contact you shortly with all the details.",
        ],
    ),
    ("go_home", ["Asosiy sahifa", "На главную", "Home"]),
    ("help_button", ["Yordam kerakmi?", "Нужна помощь?", "Need help?"]),
];

const REVIEW_TEXTS_UZ: &[&str] = &[
    "Darslar qiziqarli va interaktiv. Gapirish ko'nikmam tez rivojlandi.",
    "Ustozlar juda e'tiborli, har bir xatoni tushuntirib berishadi.",
    "Imtihonga tayyorgarlik aniq reja asosida bo'ldi, natijadan juda xursandman.",
];

const REVIEW_TEXTS_RU: &[&str] = &[
    "Занятия интерактивные и интересные. Разговорная речь быстро улучшилась.",
    "Преподаватели очень внимательные и разбирают каждую ошибку.",
    "Подготовка к экзамену шла по чёткому плану, результатом очень доволен.",
];

const REVIEW_TEXTS_EN: &[&str] = &[
    "Classes are interactive and interesting. My speaking improved quickly.",
    "The teachers are attentive and explain every mistake.",
    "Exam preparation followed a clear plan and I am very happy with my score.",
];

fn column(lang: Language) -> usize {
    match lang {
        Language::Uz => 0,
        Language::Ru => 1,
        Language::En => 2,
    }
}

/// Translate `key` into `lang`.
pub fn t(lang: Language, key: &str) -> &str {
    ENTRIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, values)| values[column(lang)])
        .unwrap_or(key)
}

/// Testimonial texts, cycled over the reviewers. Never empty.
pub fn review_texts(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Uz => REVIEW_TEXTS_UZ,
        Language::Ru => REVIEW_TEXTS_RU,
        Language::En => REVIEW_TEXTS_EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for (key, _) in ENTRIES {
            assert!(seen.insert(*key), "duplicate key {key}");
        }
    }

    #[test]
    fn every_key_is_translated() {
        for (key, values) in ENTRIES {
            for value in values {
                assert!(!value.trim().is_empty(), "empty translation for {key}");
            }
        }
    }

    #[test]
    fn lookup_by_language() {
        assert_eq!(t(Language::Uz, "congrats"), "Tabriklaymiz!");
        assert_eq!(t(Language::Ru, "congrats"), "Поздравляем!");
        assert_eq!(t(Language::En, "congrats"), "Congratulations!");
    }

    #[test]
    fn unknown_key_is_echoed() {
        assert_eq!(t(Language::En, "no_such_key"), "no_such_key");
    }

    #[test]
    fn review_texts_are_never_empty() {
        for lang in Language::ALL {
            assert!(!review_texts(lang).is_empty());
        }
    }
}
