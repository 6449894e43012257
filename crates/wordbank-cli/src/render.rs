use wordbank_core::{Dataset, EntryView, Record};

/// Print full entry cards: headword, phonetics, translations, etymology,
/// example pair, and the audio locator when one exists. Playing the audio
/// is left to the user's player.
pub fn print_entries(dataset: &Dataset, records: &[&Record]) {
    for record in records {
        let view = dataset.entry(record);

        let mut headline = view.word().to_string();
        if let Some(ipa) = view.ipa() {
            headline.push_str(&format!("  [{ipa}]"));
        }
        if let Some(pos) = view.part_of_speech() {
            headline.push_str(&format!("  ({pos})"));
        }
        println!("{headline}");

        for (lang, text) in view.translations() {
            println!("  {lang}: {text}");
        }
        if let Some(ety) = view.etymology() {
            println!("  etymology: {ety}");
        }
        if let Some(sent) = view.example() {
            println!("  example: {sent}");
            if let Some(sent_cn) = view.example_translation() {
                println!("           {sent_cn}");
            }
        }
        if let Some(audio) = view.audio() {
            println!("  audio: {audio}");
        }
        println!();
    }
}

/// One line per suggestion: the headword and its first translation.
pub fn print_suggestion(view: EntryView<'_>) {
    match view.translations().first() {
        Some((_, text)) => println!("{}  {}", view.word(), text),
        None => println!("{}", view.word()),
    }
}
