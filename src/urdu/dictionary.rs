//! Static English→Urdu word table for the deterministic fallback
//! translator. Built once at first use, immutable afterwards. Covers common
//! function words plus the vocabulary that dominates the blogs this service
//! sees: technology, business, science, education and health.
//!
//! English articles have no Urdu counterpart and map to the empty string;
//! the translator drops them.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub static DICTIONARY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let entries: &[(&str, &str)] = &[
        // articles and function words
        ("the", ""),
        ("a", "ایک"),
        ("an", "ایک"),
        ("is", "ہے"),
        ("are", "ہیں"),
        ("was", "تھا"),
        ("were", "تھے"),
        ("be", "ہونا"),
        ("been", "رہا"),
        ("has", "ہے"),
        ("have", "ہیں"),
        ("had", "تھا"),
        ("do", "کرنا"),
        ("does", "کرتا ہے"),
        ("did", "کیا"),
        ("will", "گا"),
        ("would", "گا"),
        ("can", "سکتے ہیں"),
        ("could", "سکتا تھا"),
        ("should", "چاہیے"),
        ("must", "ضروری ہے"),
        ("may", "شاید"),
        ("and", "اور"),
        ("or", "یا"),
        ("but", "لیکن"),
        ("not", "نہیں"),
        ("no", "نہیں"),
        ("yes", "ہاں"),
        ("of", "کا"),
        ("to", "کو"),
        ("in", "میں"),
        ("on", "پر"),
        ("at", "پر"),
        ("by", "کے ذریعے"),
        ("for", "کے لیے"),
        ("with", "کے ساتھ"),
        ("without", "کے بغیر"),
        ("about", "کے بارے میں"),
        ("from", "سے"),
        ("between", "کے درمیان"),
        ("this", "یہ"),
        ("that", "وہ"),
        ("these", "یہ"),
        ("those", "وہ"),
        ("it", "یہ"),
        ("its", "اس کا"),
        ("they", "وہ"),
        ("their", "ان کا"),
        ("we", "ہم"),
        ("our", "ہمارا"),
        ("you", "آپ"),
        ("your", "آپ کا"),
        ("he", "وہ"),
        ("she", "وہ"),
        ("his", "اس کا"),
        ("her", "اس کی"),
        ("my", "میرا"),
        ("all", "تمام"),
        ("some", "کچھ"),
        ("many", "بہت سے"),
        ("more", "زیادہ"),
        ("most", "زیادہ تر"),
        ("less", "کم"),
        ("few", "چند"),
        ("other", "دوسرا"),
        ("same", "ایک جیسا"),
        ("new", "نیا"),
        ("old", "پرانا"),
        ("good", "اچھا"),
        ("bad", "برا"),
        ("big", "بڑا"),
        ("small", "چھوٹا"),
        ("great", "عظیم"),
        ("important", "اہم"),
        ("significant", "نمایاں"),
        ("key", "اہم"),
        ("main", "مرکزی"),
        ("also", "بھی"),
        ("very", "بہت"),
        ("now", "اب"),
        ("then", "پھر"),
        ("here", "یہاں"),
        ("there", "وہاں"),
        ("when", "جب"),
        ("where", "کہاں"),
        ("how", "کیسے"),
        ("why", "کیوں"),
        ("what", "کیا"),
        ("which", "جو"),
        ("who", "کون"),
        ("because", "کیونکہ"),
        ("if", "اگر"),
        ("so", "تو"),
        ("as", "جیسے"),
        ("than", "سے"),
        ("only", "صرف"),
        ("first", "پہلا"),
        ("last", "آخری"),
        ("next", "اگلا"),
        ("people", "لوگ"),
        ("person", "شخص"),
        ("time", "وقت"),
        ("year", "سال"),
        ("day", "دن"),
        ("world", "دنیا"),
        ("way", "طریقہ"),
        ("work", "کام"),
        ("life", "زندگی"),
        ("use", "استعمال"),
        ("make", "بنانا"),
        ("made", "بنایا"),
        ("say", "کہنا"),
        ("said", "کہا"),
        ("see", "دیکھنا"),
        ("know", "جاننا"),
        ("think", "سوچنا"),
        ("take", "لینا"),
        ("give", "دینا"),
        ("help", "مدد"),
        ("need", "ضرورت"),
        ("want", "چاہنا"),
        ("show", "دکھانا"),
        ("find", "تلاش کرنا"),
        ("found", "پایا"),
        ("become", "بننا"),
        ("change", "تبدیلی"),
        ("transform", "تبدیل کرنا"),
        ("fast", "تیز"),
        ("faster", "تیز تر"),
        ("slow", "آہستہ"),
        ("benefit", "فائدہ"),
        ("problem", "مسئلہ"),
        ("solution", "حل"),
        ("question", "سوال"),
        ("answer", "جواب"),
        ("example", "مثال"),
        ("part", "حصہ"),
        ("number", "نمبر"),
        ("article", "مضمون"),
        ("summary", "خلاصہ"),
        ("translation", "ترجمہ"),
        // technology
        ("technology", "ٹیکنالوجی"),
        ("computer", "کمپیوٹر"),
        ("software", "سافٹ ویئر"),
        ("hardware", "ہارڈ ویئر"),
        ("internet", "انٹرنیٹ"),
        ("data", "ڈیٹا"),
        ("information", "معلومات"),
        ("system", "نظام"),
        ("network", "نیٹ ورک"),
        ("digital", "ڈیجیٹل"),
        ("machine", "مشین"),
        ("artificial", "مصنوعی"),
        ("intelligence", "ذہانت"),
        ("algorithm", "الگورتھم"),
        ("model", "ماڈل"),
        ("website", "ویب سائٹ"),
        ("application", "ایپلیکیشن"),
        ("mobile", "موبائل"),
        ("phone", "فون"),
        ("device", "آلہ"),
        ("code", "کوڈ"),
        ("program", "پروگرام"),
        ("security", "سیکیورٹی"),
        ("user", "صارف"),
        ("online", "آن لائن"),
        ("email", "ای میل"),
        ("robot", "روبوٹ"),
        ("future", "مستقبل"),
        ("innovation", "جدت"),
        ("develop", "ترقی دینا"),
        ("development", "ترقی"),
        ("engineer", "انجینئر"),
        // business
        ("business", "کاروبار"),
        ("company", "کمپنی"),
        ("market", "مارکیٹ"),
        ("money", "پیسہ"),
        ("economy", "معیشت"),
        ("economic", "معاشی"),
        ("trade", "تجارت"),
        ("price", "قیمت"),
        ("cost", "لاگت"),
        ("profit", "منافع"),
        ("growth", "نمو"),
        ("investment", "سرمایہ کاری"),
        ("industry", "صنعت"),
        ("product", "مصنوعات"),
        ("service", "خدمت"),
        ("customer", "گاہک"),
        ("employee", "ملازم"),
        ("job", "نوکری"),
        ("manager", "منیجر"),
        ("finance", "مالیات"),
        ("bank", "بینک"),
        ("global", "عالمی"),
        ("international", "بین الاقوامی"),
        ("success", "کامیابی"),
        ("plan", "منصوبہ"),
        ("strategy", "حکمت عملی"),
        // science
        ("science", "سائنس"),
        ("research", "تحقیق"),
        ("researcher", "محقق"),
        ("scientist", "سائنسدان"),
        ("study", "مطالعہ"),
        ("evidence", "ثبوت"),
        ("experiment", "تجربہ"),
        ("theory", "نظریہ"),
        ("energy", "توانائی"),
        ("environment", "ماحول"),
        ("climate", "آب و ہوا"),
        ("nature", "فطرت"),
        ("space", "خلا"),
        ("earth", "زمین"),
        ("water", "پانی"),
        ("discovery", "دریافت"),
        ("result", "نتیجہ"),
        ("analysis", "تجزیہ"),
        ("method", "طریقہ کار"),
        ("process", "عمل"),
        ("human", "انسان"),
        ("brain", "دماغ"),
        ("cell", "خلیہ"),
        ("chemical", "کیمیائی"),
        // education
        ("education", "تعلیم"),
        ("school", "اسکول"),
        ("student", "طالب علم"),
        ("teacher", "استاد"),
        ("university", "یونیورسٹی"),
        ("learn", "سیکھنا"),
        ("knowledge", "علم"),
        ("book", "کتاب"),
        ("read", "پڑھنا"),
        ("write", "لکھنا"),
        ("language", "زبان"),
        ("word", "لفظ"),
        ("class", "کلاس"),
        ("skill", "ہنر"),
        ("training", "تربیت"),
        // health
        ("health", "صحت"),
        ("healthcare", "صحت کی دیکھ بھال"),
        ("doctor", "ڈاکٹر"),
        ("medicine", "دوا"),
        ("medical", "طبی"),
        ("disease", "بیماری"),
        ("hospital", "ہسپتال"),
        ("patient", "مریض"),
        ("treatment", "علاج"),
        ("diagnosis", "تشخیص"),
        ("body", "جسم"),
        ("blood", "خون"),
        ("heart", "دل"),
        ("cancer", "کینسر"),
        ("virus", "وائرس"),
        ("vaccine", "ویکسین"),
        ("exercise", "ورزش"),
        ("food", "خوراک"),
        ("diet", "غذا"),
        ("mental", "ذہنی"),
    ];
    entries.iter().copied().collect()
});
