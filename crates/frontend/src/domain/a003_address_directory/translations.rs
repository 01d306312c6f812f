//! Bilingual lookup tables for governorates and areas, with Arabic → English keys.
//!
//! Translation is best-effort: a value missing from the tables is shown as is.

use crate::shared::text::has_arabic;
use once_cell::sync::Lazy;
use std::collections::HashMap;

const CITY_TRANSLATIONS: &[(&str, &str)] = &[
    // governorates
    ("Sharqia", "الشرقية"),
    ("Cairo", "القاهرة"),
    ("Giza", "الجيزة"),
    ("Alexandria", "الإسكندرية"),
    ("Dakahlia", "الدقهلية"),
    ("Gharbia", "الغربية"),
    ("Monufia", "المنوفية"),
    ("Qalyubia", "القليوبية"),
    ("Behira", "البحيرة"),
    ("Ismailia", "الإسماعيلية"),
    ("Port Said", "بورسعيد"),
    ("Suez", "السويس"),
    ("Damietta", "دمياط"),
    ("Aswan", "أسوان"),
    ("Asyut", "أسيوط"),
    ("BeniSuef", "بني سويف"),
    ("Faiyum", "الفيوم"),
    ("Minya", "المنيا"),
    ("Menya", "المنيا"),
    ("Qena", "قنا"),
    ("Red Sea", "البحر الأحمر"),
    ("New Valley", "الوادي الجديد"),
    ("Matrouh", "مطروح"),
    ("North Sinai", "شمال سيناء"),
    ("South Sinai", "جنوب سيناء"),
    ("Luxor", "الأقصر"),
    ("Sohag", "سوهاج"),
    ("Kafr El-Sheikh", "كفر الشيخ"),
    // cities served as their own delivery zones
    ("Banha", "بنها"),
    ("Mansoura", "المنصورة"),
    ("6th of October", "السادس من أكتوبر"),
    ("10th of Ramadan City", "العاشر من رمضان"),
    ("New Administrative Capital", "العاصمة الإدارية"),
    ("El Sheikh Zayed", "الشيخ زايد"),
    ("Badr City", "مدينة بدر"),
    ("El Obour", "العبور"),
    ("North Coast", "الساحل الشمالي"),
    ("Ain Sokhna", "العين السخنة"),
    ("El Gouna", "الجونة"),
];

const AREA_TRANSLATIONS: &[(&str, &str)] = &[
    ("Zagazig", "الزقازيق"),
    ("Bilbeis", "بلبيس"),
    ("Abu Hammad", "أبو حماد"),
    ("Hihya", "ههيا"),
    ("Minya El Qamh", "منيا القمح"),
    ("Mashtol Al Souq", "مشتول السوق"),
    ("Maadi", "المعادي"),
    ("Nasr City", "مدينة نصر"),
    ("New Cairo", "القاهرة الجديدة"),
    ("Heliopolis", "مصر الجديدة"),
    ("Downtown", "وسط البلد"),
    ("Zamalek", "الزمالك"),
    ("Helwan", "حلوان"),
    ("Shorouk", "الشروق"),
    ("Ain Shams", "عين شمس"),
    ("El Marg", "المرج"),
    ("Dokki", "الدقي"),
    ("Mohandisen", "المهندسين"),
    ("Haram", "الهرم"),
    ("Faisal", "فيصل"),
    ("Imbaba", "إمبابة"),
    ("Bolak Al Dakrour", "بولاق الدكرور"),
    ("Sidi Gaber", "سيدي جابر"),
    ("El-Raml", "الرمل"),
    ("Smouha", "سموحة"),
    ("Miami", "ميامي"),
    ("Stanley", "ستانلي"),
    ("Montaza", "المنتزة"),
    ("Abu Qir", "أبو قير"),
    ("El Mansoura", "المنصورة"),
    ("Mit Ghamr", "ميت غمر"),
    ("Talkha", "طلخا"),
    // courier area list
    ("Abu Kabir", "أبو كبير"),
    ("Faqous", "فاقوس"),
    ("El Salheya", "الصالحية"),
    ("Deirb Negm", "ديرب نجم"),
    ("El Husseiniya", "الحسينية"),
    ("Awlad Saqr", "أولاد صقر"),
    ("Kafr Saqr", "كفر صقر"),
    ("El Ibrahimiya", "الإبراهيمية"),
    ("El Qanayat", "القنايات"),
    ("El Qurein", "القرين"),
    ("San Al Hagar", "صان الحجر"),
    ("Tanis", "تانيس"),
    ("Monshaat Abou Omar", "منشأة أبو عمر"),
    ("Sheikh Zayed", "الشيخ زايد"),
    ("6th of October", "السادس من أكتوبر"),
    ("El Obour", "العبور"),
    ("Al Rehab", "الرحاب"),
    ("The 5th Settlement", "التجمع الخامس"),
    ("The 3th Settlement", "التجمع الثالث"),
    ("The 1th Settlement", "التجمع الأول"),
    ("Madinaty", "مدينتي"),
    ("Future City", "المستقبل"),
    ("Badr City", "بدر"),
    ("Manial", "المنيل"),
    ("Al Fustat", "الفسطاط"),
    ("Eldrasa", "الدراسة"),
    ("Bab El loq", "باب اللوق"),
    ("Al Gezira", "الجزيرة"),
    ("El Zawya El Hamra", "الزاوية الحمراء"),
    ("El Sharabiya", "الشرابية"),
    ("Shubra", "شبرا"),
    ("El Weili", "الوايلي"),
    ("El-Abaseya", "العباسية"),
    ("El Daher", "الظاهر"),
    ("Elsahel", "الساحل"),
    ("Bulaq", "بولاق"),
    ("Ghamra", "غمرة"),
    ("Hadaiq El Qobbah", "حدائق القبة"),
    ("El Zayton", "الزيتون"),
    ("El Matareya", "المطرية"),
    ("El Salam", "السلام"),
    ("El Shohada", "الشهداء"),
    ("El Amireya", "الأميرية"),
    ("El Khalifa", "الخليفة"),
    ("El Mokattam", "المقطم"),
    ("El Basatin", "البساتين"),
    ("Dar El Salam", "دار السلام"),
    ("Tura", "طرة"),
    ("El Maasara", "المعصرة"),
    ("Al Tebin", "التبين"),
    ("15 May City", "15 مايو"),
    ("Al Agouzah", "العجوزة"),
    ("October", "أكتوبر"),
    ("Al-Hawamidiyya", "الحوامدية"),
    ("Badrashin", "البدرشين"),
    ("El Saf", "الصف"),
    ("Atfeh", "أطفيح"),
    ("El Ayat", "العياط"),
    ("Al Warak", "الوراق"),
    ("Kerdasa", "كرداسة"),
    ("Abu AL Numros", "أبو النمرس"),
    ("Hadayk Ahram", "حدائق الأهرام"),
    ("Omrania", "العمرانية"),
    ("Abou Rawash", "أبو رواش"),
    ("Monshaat Al Bakkari", "منشية البكري"),
    ("Kit Kat", "كيت كات"),
    ("Munib", "المنيب"),
    ("Tersa", "ترسة"),
    ("El Talbeya", "الطالبية"),
    ("El Maryoutia", "المريوطية"),
    ("Saqiyet Mekki", "ساقية مكي"),
    ("Al Mamurah", "المعمورة"),
    ("El-Agamy", "العجمي"),
    ("Dekhela", "الدخيلة"),
    ("Borg al arab", "برج العرب"),
    ("Al ameriya", "العامرية"),
    ("Mandara", "المندرة"),
    ("Asafra", "العصافرة"),
    ("Sidi Bishr", "سيدي بشر"),
    ("El Max", "المكس"),
    ("El Biyoutash", "البيطاش"),
    ("Karmouz", "كرموز"),
    ("Moharram Bek", "محرم بك"),
    ("Al Gomrok", "الجمرك"),
    ("Al Attarin", "العطارين"),
    ("Bab Sharqi", "باب شرقي"),
    ("El Labban", "اللبان"),
    ("El Mansheya", "المنشية"),
    ("El Zahireya", "الظاهرية"),
    ("El Qabary", "القباري"),
    ("El Wardian", "الورديان"),
    ("Al Anfoushi", "الأنفوشي"),
    ("El Azarita", "الأزاريطة"),
    ("Bolkly", "بولكلي"),
    ("Camp Shezar", "كامب شيزار"),
    ("Fleming", "فلمنج"),
    ("Zizinia", "زيزينيا"),
    ("Saba Pasha", "سابا باشا"),
    ("Gleem", "جليم"),
    ("Laurent", "لوران"),
    ("San Stefano", "سان ستيفانو"),
    ("Roshdy", "رشدي"),
    ("Sporting", "سبورتنج"),
    ("Victoria", "فيكتوريا"),
    ("Sidi Kerir", "سيدي كرير"),
    ("Tanta", "طنطا"),
    ("El Mahalla El Kubra", "المحلة الكبرى"),
    ("Zefta", "زفتى"),
    ("Kafr El Zayat", "كفر الزيات"),
    ("Basyoun", "بسيون"),
    ("Qutur", "قطور"),
    ("El-Senbellawein", "سنبلاوين"),
    ("Belqas", "بلقاس"),
    ("Aga", "أجا"),
    ("Tala", "تلا"),
    ("Shoubara El Khima", "شبرا الخيمة"),
    ("Al Khankah", "الخانكة"),
    ("El Qanater El Khayreya", "القناطر الخيرية"),
    ("Qalyub", "قليوب"),
    ("Shibin El Qanater", "شبين القناطر"),
    ("Kafr Shukr", "كفر شكر"),
    ("Tukh", "طوخ"),
    ("Banha", "بنها"),
    ("Quwaysna", "قويسنا"),
    ("El Sadat City", "السادات"),
    ("Ashmoun", "أشمون"),
    ("El Bagour", "الباجور"),
    ("Menouf", "منوف"),
    ("Sirs Al Layyanah", "سرس الليانة"),
    ("Shibin el Kom", "شبين الكوم"),
    ("Birket El Sab", "بركة السبع"),
    ("Al Khatatbah", "الخَطاطبة"),
    ("Damanhour", "دمنهور"),
    ("Kafr El Dawwar", "كفر الدوار"),
    ("Rasheed", "رشيد"),
    ("Edku", "إدكو"),
    ("Abu Hummus", "أبو حمص"),
    ("Itay Al Barud", "إيتاي البارود"),
    ("Shubrakhit", "شبراخيت"),
    ("Mahmoudiyah", "المحمودية"),
    ("Kom Hamada", "كوم حمادة"),
    ("Al Delengat", "الدلنجات"),
    ("Damietta", "دمياط"),
    ("New Damietta", "دمياط الجديدة"),
    ("Ras El Bar", "رأس البر"),
    ("Kafr Saad", "كفر سعد"),
    ("Kafr El Battikh", "كفر البطيخ"),
    ("Faraskur", "فارسكور"),
    ("El Rodah", "الروضة"),
    ("El Sarw", "السرو"),
    ("El Zarqa", "الزرقا"),
    ("Faiyum center", "الفيوم"),
    ("New Faiyum", "الفيوم الجديدة"),
    ("Ibsheway", "إبشواي"),
    ("Itsa", "إطسا"),
    ("Sinnuris", "سنورس"),
    ("Tamiyyah", "طامية"),
    ("Kufur an Nil", "كفر عنجر"),
    ("youssef Elsdyq", "يوسف الصديق"),
    ("Wadi El-Rayyan", "وادي الريان"),
    ("Ismailia", "الإسماعيلية"),
    ("Fayed", "فايد"),
    ("El Qantara", "القنطرة"),
    ("Tell El Kebir", "التل الكبير"),
    ("Abu Suwir", "أبو صوير"),
    ("Abu Sultan", "أبو سلطان"),
    ("El-Kasasin", "القصاصين"),
    ("Ksarfrit", "كسرفريت"),
    ("Kafr El-Shaikh", "كفر الشيخ"),
    ("Desouk", "دسوق"),
    ("Fuwwah", "فوة"),
    ("Qallin", "قلين"),
    ("Metoubes", "مطوبس"),
    ("Sidi Salem", "سيدي سالم"),
    ("Rahmaniya", "الرحمانية"),
    ("El-Hamoul", "الحامول"),
    ("El Reyad", "الرياض"),
    ("Burullus", "برلس"),
    ("Biyala", "بيلا"),
    ("Baltiem", "بلطيم"),
    ("Luxor City", "الأقصر"),
    ("New Luxor", "الأقصر الجديدة"),
    ("Armant", "أرمنت"),
    ("Esna", "إسنا"),
    ("Al Qarnah", "القرنة"),
    ("Al Madamoud", "المدامود"),
    ("Al Toud City", "الطود"),
    ("Al-Radwaniya", "الرادونية"),
    ("El-Boghdady", "البغدادي"),
    ("Madinet Al Bayadeyah", "مدينة البياضية"),
    ("Minshat Al Ammari", "منشأة العماري"),
    ("Teba", "طيبة"),
    ("Al Hebeel", "الهبيل"),
    ("Gamasa", "جمصة"),
    ("Nabaruh", "نبروه"),
    ("Tamai El Amadid", "تمي الأمديد"),
    ("Minya City", "المنيا"),
    ("New Menya", "المنيا الجديدة"),
    ("Beni Mazar", "بني مزار"),
    ("Matay", "مطاي"),
    ("Maghagha", "مغاغة"),
    ("Samalut", "سمالوط"),
    ("Abu Qurqas", "أبو قرقاص"),
    ("Madinet Al Adwah", "مدينة الأضواء"),
    ("Beni Suef city", "بني سويف"),
    ("New Beni Suef", "بني سويف الجديدة"),
    ("Biba", "ببا"),
    ("Ihnasiya", "إهناسيا"),
    ("Sumusta", "سمسطا"),
    ("Nasser", "ناصر"),
    ("Natrn Valley", "وادي النطرون"),
    ("ELFAYOM ROAD", "طريق الفيوم"),
    ("Aziz Moqbel", "عزيز مقبل"),
    ("Salah Salem", "صلاح سالم"),
    ("Abd El-Salam Aref", "عبد السلام عارف"),
    ("Port Said", "بورسعيد"),
    ("Port Fuad", "بورفؤاد"),
    ("El Dawahy", "الضواحي"),
    ("El Zohur", "الزهور"),
    ("El Sharq", "الشرق"),
    ("El Manasra", "المنسرة"),
    ("El Manakh", "المناخ"),
    ("El Hay Elamarty", "العمارة"),
    ("EL GHARB", "الغرب"),
    ("Al Ganoub", "الجنوب"),
    ("Qism El-Arab", "العرب"),
    ("Port Fuad 2", "بورفؤاد 2"),
    ("Mubarak Neighborhood", "حي مبارك"),
    ("Qena", "قنا"),
    ("New Qena", "قنا الجديدة"),
    ("Nagaa Hammadi", "نجع حمادي"),
    ("Dishna", "دشنا"),
    ("Qus", "قوص"),
    ("Qift", "قفط"),
    ("Naqada", "نقادة"),
    ("Al Waqf", "الوقف"),
    ("Sohag", "سوهاج"),
    ("New Sohag", "سوهاج الجديدة"),
    ("Akhmim", "أخميم"),
    ("New Akhmim", "أخميم الجديدة"),
    ("Tahta", "طهطا"),
    ("Tima", "طما"),
    ("Al Minshah", "المنشأة"),
    ("Al Maraghah", "المراغة"),
    ("Juhaynah West", "جهينة الغربية"),
    ("Geheinah", "جهينة"),
    ("El Kawtar", "الكوتور"),
    ("Aserat", "العسيرات"),
    ("Shandawil", "شندويل"),
    ("Saqultah", "ساقلتة"),
    ("Suez", "السويس"),
    ("Port Tawfik", "بورتوفيق"),
    ("Arbaeen", "الأربعين"),
    ("Attaka", "عتاقة"),
    ("Ganayen", "الجناين"),
    ("Aswan city", "أسوان"),
    ("New Aswan", "أسوان الجديدة"),
    ("Kom Umbu", "كوم أمبو"),
    ("Edfu", "إدفو"),
    ("Draw", "دراو"),
    ("Madinet Nasr an Nobah", "مدينة نصر النوبة"),
    ("Al Gaafrah", "الجعافرة"),
    ("New Tushka", "طوشكى الجديدة"),
    ("Asyut city", "أسيوط"),
    ("New Asyut", "أسيوط الجديدة"),
    ("Abnub", "أبنوب"),
    ("Abu Tij", "أبو تيج"),
    ("El-Ghanayem", "الغنايم"),
    ("Manfalut", "منفلوط"),
    ("Sahel Selim", "ساحل سليم"),
    ("Sodfa", "صدفا"),
    ("Al Badari", "البداري"),
    ("Al Maabdah", "المعبدة"),
    ("Asyut gharb", "أسيوط غرب"),
    ("Asyut Sharq", "أسيوط شرق"),
    ("EL Fateh", "الفتح"),
    ("Sharm El-Sheikh", "شرم الشيخ"),
    ("Dahab", "دهب"),
    ("Nuweiba", "نويبع"),
    ("Taba", "طابا"),
    ("Ras Sedr", "رأس سدر"),
    ("Abu Redis", "أبو رديس"),
    ("Saint Catherine", "سانت كاترين"),
    ("Nakhl", "نخل"),
    ("Hurghada", "الغردقة"),
    ("Safaga", "سفاجا"),
    ("Marsa Alam", "مرسى علم"),
    ("El Qusair", "القصير"),
    ("Ras Gharib", "رأس غارب"),
    ("Sahl Hasheesh", "ساحل حشيش"),
    ("Marsa Matruh", "مرسى مطروح"),
    ("El-Alamein", "العلمين"),
    ("El Hamam", "الحمام"),
    ("Sidi Barrani", "سيدي براني"),
    ("Sallum", "السلوم"),
    ("El Dabaa", "الضبعة"),
    ("Kharga", "الخارجة"),
    ("Dakhla", "الداخلة"),
    ("Farafra", "الفرافرة"),
    ("Baris", "باريس"),
    ("Balat", "بلاط"),
    ("El Arish", "العريش"),
    ("Sheikh Zuweid", "شيخ زويد"),
    ("Rafah", "رفح"),
    ("Bir al-Abd", "بئر العبد"),
    ("El Hassana", "الحسنة"),
    ("Ain Sokhna", "العين السخنة"),
    ("Zaafarana", "الزعفرانة"),
    ("El Gouna", "الجونة"),
    ("Marina", "مارينا"),
    ("El Karm", "الكرم"),
    ("North Coast", "الساحل الشمالي"),
    ("Hacienda", "هاسيندا"),
    ("Marassi", "مراسي"),
    ("Sidi Abdelrahman", "سيدي عبدالرحمن"),
    ("Ras El Hekma", "رأس الحكمة"),
    ("Alam El Rum", "علم الرومي"),
    ("Sheikh Zayed City", "مدينة الشيخ زايد"),
    ("Arkan", "أركان"),
    ("Celia", "سيليا"),
    ("Vinci", "فينشي"),
    ("Andalus", "الأندلس"),
    ("Smart Village", "القرية الذكية"),
    ("West Somid", "غرب سوميد"),
    ("10th of Ramadan City", "مدينة العاشر من رمضان"),
    ("Sanyia Misr Al-Nour", "صناعية مصر النور"),
    ("Sanyia Misr Al-Hijaz", "صناعية مصر الحجاز"),
    ("Al-Urduniya", "الأردنية"),
    ("Sidnawi", "صدنوي"),
    ("New Administrative Capital", "العاصمة الإدارية"),
    ("Diplomatic Quarter", "الحي الدبلوماسي"),
    ("El Obour City", "مدينة العبور"),
    ("El Robeiki", "الروبيكي"),
];

static CITIES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CITY_TRANSLATIONS.iter().copied().collect());

static AREAS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| AREA_TRANSLATIONS.iter().copied().collect());

/// Arabic label → English key. The first English spelling wins ("Minya" over "Menya").
static CITIES_REVERSE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (en, ar) in CITY_TRANSLATIONS.iter().copied() {
        map.entry(ar).or_insert(en);
    }
    map
});

/// Arabic label → English key for areas. Official spellings come first in the table and win.
static AREAS_REVERSE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (en, ar) in AREA_TRANSLATIONS.iter().copied() {
        map.entry(ar).or_insert(en);
    }
    map
});

/// Arabic label of a governorate, or the input unchanged
pub fn translate_city(name: &str) -> String {
    CITIES.get(name).map_or_else(|| name.to_string(), |ar| ar.to_string())
}

/// Arabic label of an area, or the input unchanged
pub fn translate_area(name: &str) -> String {
    AREAS.get(name).map_or_else(|| name.to_string(), |ar| ar.to_string())
}

/// Display label for any place name
///
/// Arabic text is returned as is; otherwise the city table is tried first,
/// then the area table.
pub fn translate(text: &str) -> String {
    if text.is_empty() || has_arabic(text) {
        return text.to_string();
    }
    CITIES
        .get(text)
        .or_else(|| AREAS.get(text))
        .map_or_else(|| text.to_string(), |ar| ar.to_string())
}

/// English key for a governorate given in Arabic; anything else passes through
pub fn canonical_governorate(name: &str) -> String {
    if !has_arabic(name) {
        return name.to_string();
    }
    CITIES_REVERSE
        .get(name)
        .map_or_else(|| name.to_string(), |en| en.to_string())
}

/// English key for an area given in Arabic; anything else passes through
pub fn canonical_area(name: &str) -> String {
    if !has_arabic(name) {
        return name.to_string();
    }
    AREAS_REVERSE
        .get(name)
        .map_or_else(|| name.to_string(), |en| en.to_string())
}
