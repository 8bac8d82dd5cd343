use lexica::analysis::token_filter::stem::measure::{ends_cvc, is_consonant, measure};
use lexica::analysis::token_filter::stem::{PorterStemmer, SimpleStemmer, Stemmer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Words from Porter's paper with their final stems.
const REFERENCE: &[(&str, &str)] = &[
    // Step 1a
    ("caresses", "caress"),
    ("ponies", "poni"),
    ("ties", "ti"),
    ("caress", "caress"),
    ("cats", "cat"),
    // Step 1b
    ("feed", "feed"),
    ("agreed", "agre"),
    ("plastered", "plaster"),
    ("bled", "bled"),
    ("motoring", "motor"),
    ("sing", "sing"),
    ("conflated", "conflat"),
    ("troubled", "troubl"),
    ("sized", "size"),
    ("hopping", "hop"),
    ("tanned", "tan"),
    ("falling", "fall"),
    ("hissing", "hiss"),
    ("fizzed", "fizz"),
    ("failing", "fail"),
    ("filing", "file"),
    // Step 1c
    ("happy", "happi"),
    ("sky", "sky"),
    // Step 2
    ("relational", "relat"),
    ("conditional", "condit"),
    ("rational", "ration"),
    ("valenci", "valenc"),
    ("hesitanci", "hesit"),
    ("digitizer", "digit"),
    ("conformabli", "conform"),
    ("radicalli", "radic"),
    ("differentli", "differ"),
    ("vileli", "vile"),
    ("analogousli", "analog"),
    ("vietnamization", "vietnam"),
    ("predication", "predic"),
    ("operator", "oper"),
    ("feudalism", "feudal"),
    ("decisiveness", "decis"),
    ("hopefulness", "hope"),
    ("callousness", "callous"),
    ("formaliti", "formal"),
    ("sensitiviti", "sensit"),
    ("sensibiliti", "sensibl"),
    // Step 3
    ("triplicate", "triplic"),
    ("formative", "form"),
    ("formalize", "formal"),
    ("electriciti", "electr"),
    ("electrical", "electr"),
    ("hopeful", "hope"),
    ("goodness", "good"),
    // Step 4
    ("revival", "reviv"),
    ("allowance", "allow"),
    ("inference", "infer"),
    ("airliner", "airlin"),
    ("gyroscopic", "gyroscop"),
    ("adjustable", "adjust"),
    ("defensible", "defens"),
    ("irritant", "irrit"),
    ("replacement", "replac"),
    ("adjustment", "adjust"),
    ("dependent", "depend"),
    ("adoption", "adopt"),
    ("homologou", "homolog"),
    ("communism", "commun"),
    ("activate", "activ"),
    ("angulariti", "angular"),
    ("homologous", "homolog"),
    ("effective", "effect"),
    ("bowdlerize", "bowdler"),
    // Step 5
    ("probate", "probat"),
    ("rate", "rate"),
    ("cease", "ceas"),
    ("controll", "control"),
    ("roll", "roll"),
];

#[test]
fn test_reference_vocabulary() {
    let stemmer = PorterStemmer::new();
    for &(word, expected) in REFERENCE {
        assert_eq!(stemmer.stem(word), expected, "stem({word})");
    }
}

#[test]
fn test_stems_of_stems_are_stable() {
    let stemmer = PorterStemmer::new();
    let words = [
        "running", "caresses", "motoring", "hopeful", "adjustment", "relational", "cats",
        "generate", "plastered", "happiness",
    ];

    for word in words {
        let once = stemmer.stem(word);
        assert_eq!(stemmer.stem(&once), once, "stem(stem({word}))");
    }
}

/// Suffixes that each trigger at least one rule.
const SUFFIXES: &[&str] = &[
    "sses", "ies", "s", "eed", "ed", "ing", "ated", "bling", "izing", "y", "ational", "tional",
    "enci", "anci", "izer", "abli", "alli", "entli", "eli", "ousli", "ization", "ation", "ator",
    "alism", "iveness", "fulness", "ousness", "aliti", "iviti", "biliti", "icate", "ative",
    "alize", "iciti", "ical", "ful", "ness", "al", "ance", "ence", "er", "ic", "able", "ible",
    "ant", "ement", "ment", "ent", "sion", "tion", "ou", "ism", "ate", "iti", "ous", "ive", "ize",
    "e", "ll",
];

#[test]
fn test_measure_never_grows_across_steps() {
    let stemmer = PorterStemmer::new();
    let mut rng = StdRng::seed_from_u64(42);
    let letters: Vec<char> = ('a'..='z').collect();

    for _ in 0..20_000 {
        let len = rng.random_range(1..=7);
        let mut word: String = (0..len)
            .map(|_| letters[rng.random_range(0..letters.len())])
            .collect();
        word.push_str(SUFFIXES[rng.random_range(0..SUFFIXES.len())]);

        let mut previous = word.clone();
        for (step, next) in stemmer.trace(&word) {
            assert!(
                measure(&next) <= measure(&previous),
                "step {step} grew the measure of {word}: {previous} -> {next}"
            );
            previous = next;
        }
        assert_eq!(previous, stemmer.stem(&word), "trace and stem disagree on {word}");
    }
}

#[test]
fn test_short_and_mixed_case_input() {
    let stemmer = PorterStemmer::new();
    assert_eq!(stemmer.stem(""), "");
    assert_eq!(stemmer.stem("a"), "a");
    assert_eq!(stemmer.stem("IS"), "is");
    assert_eq!(stemmer.stem("Ponies"), "poni");
}

#[test]
fn test_measure_examples() {
    assert_eq!(measure("tree"), 0);
    assert_eq!(measure("by"), 0);
    assert_eq!(measure("trouble"), 1);
    assert_eq!(measure("oats"), 1);
    assert_eq!(measure("troubles"), 2);
    assert_eq!(measure("private"), 2);

    assert!(is_consonant("toy", 2));
    assert!(!is_consonant("syzygy", 1));
    assert!(ends_cvc("hop"));
    assert!(!ends_cvc("snow"));
}

#[test]
fn test_stemmers_agree_on_plurals() {
    let porter = PorterStemmer::new();
    let simple = SimpleStemmer::new();

    assert_eq!(porter.stem("cats"), simple.stem("cats"));
    assert_eq!(simple.stem("ponies"), "pony");
    assert_eq!(porter.stem("ponies"), "poni");
}
