use std::fs;

use transcript_prep::application::prepare_use_case::{PrepareConfig, PrepareUseCase};
use transcript_prep::data::{
    batcher::SequenceBatcher,
    encoder::build_encoder_decoder,
    tokenizer::{TokenizeOptions, Tokenizer},
    vocabulary::top_frequent_words,
};
use transcript_prep::infra::{
    artifact_store::ArtifactStore,
    frequency_report::REPORT_FILE,
    vocab_store::{VocabularyStore, VOCABULARY_FILE},
};

const TALK_ONE: &str = "Chris: Hello there my friend. How are you today?\n\
                        (Applause) We love rust code a lot!";
const TALK_TWO: &str = "Second talk has several words in it. Short one.";

#[test]
fn test_core_pipeline_round_trip() {
    let tokenizer = Tokenizer::new(TokenizeOptions::default()).unwrap();
    let clip = tokenizer.wrap_clip(TALK_ONE);
    assert_eq!(clip.len(), 22);

    let words: Vec<&str> = clip.content_words().collect();
    let ranked = top_frequent_words(&words, 1000).unwrap();
    let (encoder, decoder) = build_encoder_decoder(&ranked.words, false);

    let ids = encoder.encode(clip.words()).unwrap();
    assert_eq!(
        decoder.decode_text(&ids).unwrap(),
        "hello there my friend . how are you today . we love rust code a lot ."
    );

    let batches = SequenceBatcher::new(1, 10).unwrap().batch(&[ids.clone()]).unwrap();
    assert_eq!(batches.num_truncate, 3);
    assert_eq!(batches.chunks.len(), 3);
    let rejoined: Vec<u32> = batches.chunks.concat();
    assert_eq!(&rejoined[..ids.len()], ids.as_slice());
    assert!(rejoined[ids.len()..].iter().all(|&id| id == 0));
}

#[test]
fn test_prepare_use_case_writes_outputs() {
    let input  = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("001.txt"), TALK_ONE).unwrap();
    fs::write(input.path().join("002.txt"), TALK_TWO).unwrap();

    let cfg = PrepareConfig {
        input_dir:       input.path().to_string_lossy().into_owned(),
        output_dir:      output.path().to_string_lossy().into_owned(),
        top_k:           5,
        batch_size:      2,
        truncate_length: 8,
        ..Default::default()
    };

    let summary = PrepareUseCase::new(cfg.clone()).execute().unwrap();
    assert_eq!(summary.clips, 2);
    assert_eq!(summary.vocab_len, 5);
    assert_eq!(summary.batch_count, 1);
    assert_eq!(summary.dropped_clips, 0);
    // longest clip is 22 IDs → 3 slots of 8, times 2 clips
    assert_eq!(summary.chunks, 6);

    assert!(output.path().join(VOCABULARY_FILE).exists());
    assert!(output.path().join(REPORT_FILE).exists());

    let store = ArtifactStore::new(output.path()).unwrap();
    assert_eq!(store.load_config().unwrap(), cfg);
    let batches = store.load_batches().unwrap();
    assert!(batches.chunks.iter().all(|c| c.len() == 8));

    let record = VocabularyStore::new(output.path()).load().unwrap();
    assert_eq!(record.words.len(), 5);
    assert!(record.has_unknown);
}

#[test]
fn test_prepare_rerun_with_new_settings_rebuilds_vocabulary() {
    let input  = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("001.txt"), TALK_ONE).unwrap();
    fs::write(input.path().join("002.txt"), TALK_TWO).unwrap();

    let first = PrepareConfig {
        input_dir:       input.path().to_string_lossy().into_owned(),
        output_dir:      output.path().to_string_lossy().into_owned(),
        top_k:           5,
        has_unknown:     true,
        batch_size:      2,
        truncate_length: 8,
        ..Default::default()
    };
    PrepareUseCase::new(first.clone()).execute().unwrap();

    // Same output directory, different vocabulary settings
    let second = PrepareConfig { top_k: 3, has_unknown: false, ..first };
    let summary = PrepareUseCase::new(second.clone()).execute().unwrap();
    assert_eq!(summary.vocab_len, 3);

    let record = VocabularyStore::new(output.path()).load().unwrap();
    assert_eq!(record.words.len(), 3);
    assert_eq!(record.top_k, 3);
    assert!(!record.has_unknown);

    let store = ArtifactStore::new(output.path()).unwrap();
    assert_eq!(store.load_config().unwrap(), second);

    // 3 words + _PAD_ + 4 markers: every batched ID must exist in the saved vocabulary
    let (encoder, _) = record.encoder_decoder();
    let batches = store.load_batches().unwrap();
    assert!(batches.chunks.iter().flatten().all(|&id| (id as usize) < encoder.len()));
}

#[test]
fn test_prepare_fails_on_empty_input() {
    let input  = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let cfg = PrepareConfig {
        input_dir:  input.path().to_string_lossy().into_owned(),
        output_dir: output.path().to_string_lossy().into_owned(),
        ..Default::default()
    };
    assert!(PrepareUseCase::new(cfg).execute().is_err());
}
