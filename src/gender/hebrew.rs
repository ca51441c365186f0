//! Built-in Hebrew legal vocabulary.
//!
//! Columns: male (lemma), female, plural, organization, takes definite article.
//! Organizations take feminine singular agreement (`החברה`), so every row
//! carries the feminine form in the organization column.

pub(crate) type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    bool,
);

pub(crate) const HEBREW_ENTRIES: &[Row] = &[
    // Pronouns and pronominal suffixes
    ("הוא", "היא", "הם", "היא", false),
    ("לו", "לה", "להם", "לה", false),
    ("אותו", "אותה", "אותם", "אותה", false),
    ("שלו", "שלה", "שלהם", "שלה", false),
    ("עליו", "עליה", "עליהם", "עליה", false),
    ("ממנו", "ממנה", "מהם", "ממנה", false),
    ("בו", "בה", "בהם", "בה", false),
    ("אליו", "אליה", "אליהם", "אליה", false),
    ("עצמו", "עצמה", "עצמם", "עצמה", false),
    ("ידו", "ידה", "ידם", "ידה", false),
    ("חתימתו", "חתימתה", "חתימתם", "חתימתה", false),
    ("רכושו", "רכושה", "רכושם", "רכושה", false),
    ("נכסיו", "נכסיה", "נכסיהם", "נכסיה", false),
    ("ילדיו", "ילדיה", "ילדיהם", "ילדיה", false),
    ("יורשיו", "יורשיה", "יורשיהם", "יורשיה", false),
    ("דעתו", "דעתה", "דעתם", "דעתה", false),
    ("רצונו", "רצונה", "רצונם", "רצונה", false),
    ("מותו", "מותה", "מותם", "מותה", false),
    ("פטירתו", "פטירתה", "פטירתם", "פטירתה", false),
    ("זכויותיו", "זכויותיה", "זכויותיהם", "זכויותיה", false),
    ("חובותיו", "חובותיה", "חובותיהם", "חובותיה", false),
    ("מטעמו", "מטעמה", "מטעמם", "מטעמה", false),
    ("בשמו", "בשמה", "בשמם", "בשמה", false),
    ("לטובתו", "לטובתה", "לטובתם", "לטובתה", false),
    ("ברשותו", "ברשותה", "ברשותם", "ברשותה", false),
    ("בבעלותו", "בבעלותה", "בבעלותם", "בבעלותה", false),
    ("כתובתו", "כתובתה", "כתובתם", "כתובתה", false),
    ("מענו", "מענה", "מענם", "מענה", false),
    ("בהיותו", "בהיותה", "בהיותם", "בהיותה", false),
    ("מרצונו", "מרצונה", "מרצונם", "מרצונה", false),
    ("עיזבונו", "עיזבונה", "עיזבונם", "עיזבונה", false),
    ("תפקידו", "תפקידה", "תפקידם", "תפקידה", false),
    ("עבורו", "עבורה", "עבורם", "עבורה", false),
    ("בא כוחו", "באת כוחה", "באי כוחם", "באת כוחה", false),
    // Past tense
    ("עשה", "עשתה", "עשו", "עשתה", false),
    ("חתם", "חתמה", "חתמו", "חתמה", false),
    ("ציווה", "ציוותה", "ציוו", "ציוותה", false),
    ("הצהיר", "הצהירה", "הצהירו", "הצהירה", false),
    ("קיבל", "קיבלה", "קיבלו", "קיבלה", false),
    ("היה", "הייתה", "היו", "הייתה", false),
    ("ביקש", "ביקשה", "ביקשו", "ביקשה", false),
    ("הסכים", "הסכימה", "הסכימו", "הסכימה", false),
    // Future tense
    ("יהיה", "תהיה", "יהיו", "תהיה", false),
    ("ישלם", "תשלם", "ישלמו", "תשלם", false),
    ("יחתום", "תחתום", "יחתמו", "תחתום", false),
    ("ימסור", "תמסור", "ימסרו", "תמסור", false),
    ("ישא", "תישא", "ישאו", "תישא", false),
    ("יפעל", "תפעל", "יפעלו", "תפעל", false),
    ("ישפה", "תשפה", "ישפו", "תשפה", false),
    ("יקבל", "תקבל", "יקבלו", "תקבל", false),
    // Present tense and participles (nominal use takes the article)
    ("מצהיר", "מצהירה", "מצהירים", "מצהירה", true),
    ("מתחייב", "מתחייבת", "מתחייבים", "מתחייבת", true),
    ("מסכים", "מסכימה", "מסכימים", "מסכימה", true),
    ("מאשר", "מאשרת", "מאשרים", "מאשרת", true),
    ("מוריש", "מורישה", "מורישים", "מורישה", true),
    ("מבקש", "מבקשת", "מבקשים", "מבקשת", true),
    ("נותן", "נותנת", "נותנים", "נותנת", true),
    ("מייפה", "מייפה", "מייפים", "מייפה", true),
    ("חוזר", "חוזרת", "חוזרים", "חוזרת", false),
    ("מבטל", "מבטלת", "מבטלים", "מבטלת", true),
    ("עושה", "עושה", "עושים", "עושה", false),
    ("יכול", "יכולה", "יכולים", "יכולה", false),
    ("רוצה", "רוצה", "רוצים", "רוצה", false),
    // Adjectives
    ("רשאי", "רשאית", "רשאים", "רשאית", false),
    ("זכאי", "זכאית", "זכאים", "זכאית", true),
    ("אחראי", "אחראית", "אחראים", "אחראית", true),
    ("חייב", "חייבת", "חייבים", "חייבת", true),
    ("מודע", "מודעת", "מודעים", "מודעת", false),
    ("בריא", "בריאה", "בריאים", "בריאה", false),
    ("כשיר", "כשירה", "כשירים", "כשירה", false),
    ("ישראלי", "ישראלית", "ישראלים", "ישראלית", true),
    ("מורשה", "מורשית", "מורשים", "מורשית", true),
    ("ממונה", "ממונה", "ממונים", "ממונה", true),
    // Parties and roles
    ("מנוח", "מנוחה", "מנוחים", "מנוחה", true),
    ("מצווה", "מצווה", "מצווים", "מצווה", true),
    ("יורש", "יורשת", "יורשים", "יורשת", true),
    ("נאמן", "נאמנה", "נאמנים", "נאמנה", true),
    ("מנהל", "מנהלת", "מנהלים", "מנהלת", true),
    ("אפוטרופוס", "אפוטרופסית", "אפוטרופסים", "אפוטרופסית", true),
    ("מיופה כוח", "מיופת כוח", "מיופי כוח", "מיופת כוח", false),
    ("חתום מטה", "חתומה מטה", "חתומים מטה", "חתומה מטה", true),
    ("לקוח", "לקוחה", "לקוחות", "לקוחה", true),
    ("שוכר", "שוכרת", "שוכרים", "שוכרת", true),
    ("משכיר", "משכירה", "משכירים", "משכירה", true),
    ("קונה", "קונה", "קונים", "קונה", true),
    ("מוכר", "מוכרת", "מוכרים", "מוכרת", true),
    ("לווה", "לווה", "לווים", "לווה", true),
    ("מלווה", "מלווה", "מלווים", "מלווה", true),
    ("עובד", "עובדת", "עובדים", "עובדת", true),
    ("מעסיק", "מעסיקה", "מעסיקים", "מעסיקה", true),
    ("תובע", "תובעת", "תובעים", "תובעת", true),
    ("נתבע", "נתבעת", "נתבעים", "נתבעת", true),
    ("משיב", "משיבה", "משיבים", "משיבה", true),
    ("תושב", "תושבת", "תושבים", "תושבת", true),
    ("נושה", "נושה", "נושים", "נושה", true),
    ("זוכה", "זוכה", "זוכים", "זוכה", true),
];
