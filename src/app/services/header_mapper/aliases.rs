//! Built-in header alias table
//!
//! Maps the header spellings observed in real registry exports (Arabic and
//! English, abbreviated, punctuated) onto canonical fields. Entries are
//! data: extend this table or supply a JSON overlay at runtime, no pipeline
//! logic changes needed.
//!
//! Order matters for the substring tier: more specific (longer) aliases come
//! first so that e.g. a guardian phone header never falls through to a
//! generic phone alias. Exact matches are unaffected by order.

use crate::app::models::CanonicalField;

pub(crate) const BUILTIN_ALIASES: &[(&str, CanonicalField)] = &[
    // Guardian identifiers before the student ones so substring scans pick
    // the specific alias
    ("الرقم القومي لولي الامر", CanonicalField::GuardianNationalId),
    ("رقم قومي ولي الامر", CanonicalField::GuardianNationalId),
    ("guardian national id", CanonicalField::GuardianNationalId),
    // WhatsApp
    ("رقم واتساب ولي الامر", CanonicalField::GuardianWhatsapp),
    ("رقم الواتس", CanonicalField::GuardianWhatsapp),
    ("واتس اب", CanonicalField::GuardianWhatsapp),
    ("واتساب", CanonicalField::GuardianWhatsapp),
    ("whatsapp number", CanonicalField::GuardianWhatsapp),
    ("whatsapp", CanonicalField::GuardianWhatsapp),
    // Guardian phone, specific spellings
    ("رقم هاتف ولي الامر", CanonicalField::GuardianPhone),
    ("هاتف ولي الامر", CanonicalField::GuardianPhone),
    ("تليفون ولي الامر", CanonicalField::GuardianPhone),
    ("موبايل ولي الامر", CanonicalField::GuardianPhone),
    ("رقم ولي الامر", CanonicalField::GuardianPhone),
    ("guardian phone", CanonicalField::GuardianPhone),
    ("parent phone", CanonicalField::GuardianPhone),
    // Mother phone before generic phone aliases
    ("رقم هاتف الام", CanonicalField::MotherPhone),
    ("هاتف الام", CanonicalField::MotherPhone),
    ("رقم الام", CanonicalField::MotherPhone),
    ("mother phone", CanonicalField::MotherPhone),
    // Guardian job, specific spelling
    ("وظيفة ولي الامر", CanonicalField::GuardianJob),
    ("مهنة ولي الامر", CanonicalField::GuardianJob),
    ("guardian job", CanonicalField::GuardianJob),
    // Mother name before the bare name aliases
    ("اسم الام", CanonicalField::MotherName),
    ("والدة الطالب", CanonicalField::MotherName),
    ("mother name", CanonicalField::MotherName),
    // Guardian name; the bare "ولي الامر" must trail every other guardian
    // alias it is a substring of
    ("اسم ولي الامر", CanonicalField::GuardianName),
    ("guardian name", CanonicalField::GuardianName),
    ("parent name", CanonicalField::GuardianName),
    ("ولي الامر", CanonicalField::GuardianName),
    // Student name
    ("اسم الطالب رباعي", CanonicalField::FullName),
    ("الاسم الرباعي", CanonicalField::FullName),
    ("اسم الطالب", CanonicalField::FullName),
    ("اسم التلميذ", CanonicalField::FullName),
    ("الاسم بالكامل", CanonicalField::FullName),
    ("الاسم", CanonicalField::FullName),
    ("student name", CanonicalField::FullName),
    ("full name", CanonicalField::FullName),
    ("name", CanonicalField::FullName),
    // Student national id
    ("الرقم القومي للطالب", CanonicalField::NationalId),
    ("الرقم القومي", CanonicalField::NationalId),
    ("رقم قومي", CanonicalField::NationalId),
    ("الرقم المدني", CanonicalField::NationalId),
    ("national id", CanonicalField::NationalId),
    ("national number", CanonicalField::NationalId),
    // Demographics
    ("النوع", CanonicalField::Gender),
    ("الجنس", CanonicalField::Gender),
    ("gender", CanonicalField::Gender),
    ("sex", CanonicalField::Gender),
    ("الديانة", CanonicalField::Religion),
    ("الدين", CanonicalField::Religion),
    ("religion", CanonicalField::Religion),
    ("الجنسية", CanonicalField::Nationality),
    ("nationality", CanonicalField::Nationality),
    // Academic year before stage: "السنة الدراسية" must not fall through to
    // a stage alias
    ("العام الدراسي", CanonicalField::AcademicYear),
    ("السنة الدراسية", CanonicalField::AcademicYear),
    ("academic year", CanonicalField::AcademicYear),
    ("school year", CanonicalField::AcademicYear),
    // Stage (grade level)
    ("المرحلة الدراسية", CanonicalField::StageName),
    ("المرحلة", CanonicalField::StageName),
    ("الصف الدراسي", CanonicalField::StageName),
    ("الصف", CanonicalField::StageName),
    ("grade", CanonicalField::StageName),
    ("stage", CanonicalField::StageName),
    ("level", CanonicalField::StageName),
    // Class section
    ("الفصل", CanonicalField::ClassName),
    ("الشعبة", CanonicalField::ClassName),
    ("class", CanonicalField::ClassName),
    ("section", CanonicalField::ClassName),
    ("classroom", CanonicalField::ClassName),
    // Generic phone spellings map to the guardian phone, the primary
    // contact number in these exports; they trail every specific phone alias
    ("رقم الهاتف", CanonicalField::GuardianPhone),
    ("رقم الموبايل", CanonicalField::GuardianPhone),
    ("رقم التليفون", CanonicalField::GuardianPhone),
    ("الهاتف", CanonicalField::GuardianPhone),
    ("التليفون", CanonicalField::GuardianPhone),
    ("الموبايل", CanonicalField::GuardianPhone),
    ("phone number", CanonicalField::GuardianPhone),
    ("phone", CanonicalField::GuardianPhone),
    ("mobile", CanonicalField::GuardianPhone),
    // Generic job spellings
    ("الوظيفة", CanonicalField::GuardianJob),
    ("المهنة", CanonicalField::GuardianJob),
    ("occupation", CanonicalField::GuardianJob),
    ("job", CanonicalField::GuardianJob),
];
