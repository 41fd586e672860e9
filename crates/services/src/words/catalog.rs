//! Built-in vocabulary lists.

use speller_core::VocabularyEntry;

struct RawEntry {
    source: &'static str,
    target: &'static str,
    definition: &'static str,
}

const fn raw(source: &'static str, target: &'static str, definition: &'static str) -> RawEntry {
    RawEntry {
        source,
        target,
        definition,
    }
}

/// Mixed A1–B2 words served by the local source. Verbs keep their `to ` marker
/// here; it is stripped when entries are built.
const LOCAL_WORDS: &[RawEntry] = &[
    raw("Elma", "apple", "A round fruit with red or green skin."),
    raw("Kitap", "book", "A set of pages with writing on them."),
    raw("Pencere", "window", "An opening in a wall to let in light and air."),
    raw("Mutfak", "kitchen", "A room where food is prepared and cooked."),
    raw("Bahçe", "garden", "A piece of land where flowers or vegetables are grown."),
    raw("Hastane", "hospital", "A place where sick or injured people are treated."),
    raw("Havalimanı", "airport", "A place where planes take off and land."),
    raw("Kütüphane", "library", "A building where books are kept for people to read or borrow."),
    raw("Anahtar", "key", "A piece of metal used to open a lock."),
    raw("Şemsiye", "umbrella", "An object that protects you from the rain."),
    raw("Gözlük", "glasses", "Two lenses in a frame that help you see better."),
    raw("Doktor", "doctor", "A person whose job is to treat sick people."),
    raw("Öğretmen", "teacher", "A person whose job is to teach."),
    raw("Komşu", "neighbour", "A person who lives near you."),
    raw("Hafta", "week", "A period of seven days."),
    raw("Mevsim", "season", "One of the four periods of the year."),
    raw("Hava durumu", "weather", "The condition of the air, such as rain or sunshine."),
    raw("Sağlık", "health", "The condition of your body and mind."),
    raw("Bilgi", "knowledge", "Information and understanding you gain through learning."),
    raw("Deneyim", "experience", "Knowledge or skill you get from doing something."),
    raw("Karar", "decision", "A choice that you make after thinking."),
    raw("Fırsat", "opportunity", "A situation that makes it possible to do something."),
    raw("Çevre", "environment", "The natural world of land, water and air."),
    raw("Toplum", "society", "People living together in an organized community."),
    raw("Başarı", "success", "Achieving the results you wanted."),
    raw("Sorumluluk", "responsibility", "A duty to deal with or take care of something."),
    raw("Güzel", "beautiful", "Very attractive or pleasant."),
    raw("Yorgun", "tired", "Needing rest or sleep."),
    raw("Aç", "hungry", "Wanting or needing food."),
    raw("Pahalı", "expensive", "Costing a lot of money."),
    raw("Ucuz", "cheap", "Costing little money."),
    raw("Kolay", "easy", "Not difficult."),
    raw("Zor", "difficult", "Not easy; needing effort."),
    raw("Tehlikeli", "dangerous", "Able to harm or kill."),
    raw("Sessiz", "quiet", "Making very little noise."),
    raw("Önemli", "important", "Having great value or effect."),
    raw("Mümkün", "possible", "Able to be done or to happen."),
    raw("Gerekli", "necessary", "Needed in order to achieve a result."),
    raw("Güvenilir", "reliable", "Able to be trusted."),
    raw("Şaşırmış", "surprised", "Feeling surprise because something unexpected happened."),
    raw("Koşmak", "to run", "To move quickly on your feet."),
    raw("Yüzmek", "to swim", "To move through water using your arms and legs."),
    raw("Uyumak", "to sleep", "To rest with your eyes closed."),
    raw("Okumak", "to read", "To look at words and understand them."),
    raw("Yazmak", "to write", "To make letters or words on a surface."),
    raw("Öğrenmek", "to learn", "To get knowledge or a new skill."),
    raw("Anlamak", "to understand", "To know the meaning of something."),
    raw("Hatırlamak", "to remember", "To bring something back into your mind."),
    raw("Unutmak", "to forget", "To be unable to remember something."),
    raw("Beklemek", "to wait", "To stay somewhere until something happens."),
    raw("Satın almak", "to buy", "To get something by paying money for it."),
    raw("Seyahat etmek", "to travel", "To go from one place to another."),
    raw("Açıklamak", "to explain", "To make something clear or easy to understand."),
    raw("Geliştirmek", "to improve", "To make something better."),
    raw("Karşılaştırmak", "to compare", "To look at how things are similar or different."),
    raw("Tavsiye etmek", "to recommend", "To suggest that something is good or suitable."),
    raw("Kaçınmak", "to avoid", "To stay away from someone or something."),
    raw("Başvurmak", "to apply", "To make a formal request for something."),
    raw("Ödünç almak", "to borrow", "To take something that you will give back later."),
    raw("Kabul etmek", "to accept", "To agree to take something that is offered."),
];

/// Entries served when remote generation is unavailable.
const FALLBACK_WORDS: &[RawEntry] = &[
    raw("Elma", "apple", "A round fruit with red or green skin."),
    raw("Kitap", "book", "A set of pages with writing on them."),
    raw("Su", "water", "A clear liquid that falls as rain."),
    raw("Mutlu", "happy", "Feeling or showing pleasure."),
    raw("Kırmızı", "red", "The color of blood or fire."),
    raw("Okul", "school", "A place where children learn."),
    raw("Kedi", "cat", "A small animal kept as a pet."),
    raw("Köpek", "dog", "An animal often kept as a pet or for guarding."),
    raw("Araba", "car", "A road vehicle with an engine and four wheels."),
    raw("Ev", "house", "A building for people to live in."),
    raw("Kapı", "door", "A movable entrance to a room or building."),
    raw("Pencere", "window", "An opening in a wall to let in light and air."),
    raw("Masa", "table", "A piece of furniture with a flat top and legs."),
    raw("Sandalye", "chair", "A seat with a back for one person."),
    raw("Kalem", "pen", "A tool for writing with ink."),
    raw("Defter", "notebook", "A book of plain paper for writing on."),
    raw("Bilgisayar", "computer", "An electronic machine for storing and processing data."),
    raw("Telefon", "phone", "A device used for talking to someone who is far away."),
    raw("Arkadaş", "friend", "A person you know well and like."),
    raw("Aile", "family", "A group of parents and children."),
    raw("Anne", "mother", "A female parent."),
    raw("Baba", "father", "A male parent."),
    raw("Çocuk", "child", "A young human being."),
    raw("Güneş", "sun", "The star that gives light and heat to the earth."),
    raw("Ay", "moon", "The natural satellite of the earth."),
    raw("Deniz", "sea", "The salt water that covers most of the earth's surface."),
    raw("Ağaç", "tree", "A tall plant with a trunk and branches."),
    raw("Çiçek", "flower", "The part of a plant that is often brightly colored."),
    raw("Kuş", "bird", "An animal with feathers and wings."),
    raw("Ekmek", "bread", "A food made from flour and water, baked."),
    raw("Süt", "milk", "A white liquid produced by female mammals."),
    raw("Çay", "tea", "A drink made by pouring hot water on dried leaves."),
    raw("Kahve", "coffee", "A hot drink made from roasted coffee beans."),
    raw("Yemek", "food", "Something that people and animals eat."),
    raw("Sabah", "morning", "The early part of the day."),
    raw("Akşam", "evening", "The end of the day and early part of the night."),
    raw("Gece", "night", "The time when it is dark and people sleep."),
    raw("Bugün", "today", "The present day."),
    raw("Yarın", "tomorrow", "The day after today."),
    raw("Evet", "yes", "Used to give an affirmative response."),
    raw("Hayır", "no", "Used to give a negative response."),
    raw("Lütfen", "please", "Used to ask for something politely."),
    raw("Teşekkürler", "thanks", "An expression of gratitude."),
    raw("Merhaba", "hello", "A greeting."),
    raw("Büyük", "big", "Large in size."),
    raw("Küçük", "small", "Little in size."),
    raw("Sıcak", "hot", "Having a high temperature."),
    raw("Soğuk", "cold", "Having a low temperature."),
    raw("Hızlı", "fast", "Moving quickly."),
    raw("Yavaş", "slow", "Moving without much speed."),
];

fn build(list: &[RawEntry]) -> Vec<VocabularyEntry> {
    list.iter()
        .filter_map(|raw| VocabularyEntry::new(raw.source, raw.target, raw.definition).ok())
        .collect()
}

/// The built-in list used by `LocalWordSource`.
#[must_use]
pub fn local_entries() -> Vec<VocabularyEntry> {
    build(LOCAL_WORDS)
}

/// The built-in list used when remote generation fails.
#[must_use]
pub fn fallback_entries() -> Vec<VocabularyEntry> {
    build(FALLBACK_WORDS)
}
