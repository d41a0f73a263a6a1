use ets2emc_core::config::ConvertConfigBuilder;
use ets2emc_core::source::{JobSource, PresetTable, load_job, load_pipeline, load_preset};
use ets2emc_core::translate::job::render_job;
use ets2emc_core::{ConvertConfig, CoreError, Level, translate_job};
use serde_json::json;

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {path}: {e}"))
}

fn job_source() -> JobSource {
    let job = load_job(&fixture("job.json")).unwrap();
    let pipeline = load_pipeline(&fixture("pipeline.json")).unwrap();
    let presets: PresetTable = ["preset_mp4.json", "preset_hls.json"]
        .iter()
        .map(|name| load_preset(&fixture(name)).unwrap())
        .collect();
    JobSource::new(job, pipeline, presets).unwrap()
}

#[test]
fn assembles_groups_in_playlist_file_thumbnail_order() {
    let source = job_source();
    let (document, _) = translate_job(&source, &ConvertConfig::default());

    let groups: Vec<(&str, &str)> = document
        .settings
        .output_groups
        .iter()
        .map(|g| (g.name.as_str(), g.output_group_settings.destination()))
        .collect();
    assert_eq!(
        groups,
        vec![
            ("Apple HLS", "s3://media-out/converted/"),
            ("File Group", "s3://media-out/converted/movie"),
            ("File Group", "s3://media-thumbs/converted/movie"),
        ]
    );
}

#[test]
fn renders_pascal_case_job_with_user_metadata() {
    let source = job_source();
    let config = ConvertConfigBuilder::new()
        .role_arn("arn:aws:iam::123456789012:role/MediaConvert")
        .build();
    let (document, _) = translate_job(&source, &config);
    let value = render_job(&document, &source.job, &config).unwrap();

    assert_eq!(value["Role"], "arn:aws:iam::123456789012:role/MediaConvert");
    assert_eq!(value["UserMetadata"], json!({ "CustomerId": "42", "batch": "nightly" }));

    let input = &value["Settings"]["Inputs"][0];
    assert_eq!(input["FileInput"], "s3://media-in/source/movie.mov");
    assert_eq!(input["AudioSelectors"]["Audio Selector 1"]["DefaultSelection"], "DEFAULT");
    assert_eq!(input["InputClippings"][0]["StartTimecode"], "00:00:10:00");
    assert_eq!(input["InputClippings"][0]["EndTimecode"], "00:02:10:00");
    assert_eq!(
        input["CaptionSelectors"]["Captions Selector 1"]["SourceSettings"]["SourceType"],
        "EMBEDDED"
    );
    assert_eq!(
        input["CaptionSelectors"]["Captions Selector 2"]["SourceSettings"]["FileSourceSettings"],
        json!({
            "SourceFile": "s3://media-in/source/movie.en.srt",
            "TimeDelta": 1,
            "TimeDeltaUnits": "SECONDS"
        })
    );

    let hls = &value["Settings"]["OutputGroups"][0];
    assert_eq!(hls["OutputGroupSettings"]["Type"], "HLS_GROUP_SETTINGS");
    assert_eq!(hls["OutputGroupSettings"]["HlsGroupSettings"]["SegmentLength"], 10);
    assert_eq!(hls["OutputGroupSettings"]["HlsGroupSettings"]["MinSegmentLength"], 0);
    assert_eq!(hls["Outputs"][0]["NameModifier"], "-hls/400k");
    assert_eq!(hls["Outputs"][1]["NameModifier"], "-hls/1m");
    assert_eq!(hls["Outputs"][0]["ContainerSettings"]["Container"], "M3U8");

    let video = &hls["Outputs"][0]["VideoDescription"];
    assert_eq!(video["CodecSettings"]["Codec"], "H_264");
    let h264 = &video["CodecSettings"]["H264Settings"];
    assert_eq!(h264["RateControlMode"], "QVBR");
    assert_eq!(h264["MaxBitrate"], 272_000);
    assert_eq!(h264["HrdBufferSize"], 10_000_000);
    assert_eq!(h264["CodecProfile"], "BASELINE");
    assert_eq!(h264["CodecLevel"], "LEVEL_3");
    assert_eq!(h264["EntropyEncoding"], "CAVLC");
    assert_eq!(h264["ParNumerator"], 24);
    assert_eq!(h264["ParDenominator"], 25);
    assert!(h264.get("Bitrate").is_none());

    let file = &value["Settings"]["OutputGroups"][1];
    assert_eq!(file["Outputs"][0]["ContainerSettings"]["Container"], "MP4");
    assert_eq!(file["Outputs"][1]["NameModifier"], "-ENG");
    assert_eq!(
        file["Outputs"][1]["CaptionDescriptions"][0]["DestinationSettings"]["DestinationType"],
        "WEBVTT"
    );

    let thumbnails = &value["Settings"]["OutputGroups"][2]["Outputs"][0];
    assert_eq!(thumbnails["NameModifier"], "-192x108");
    assert_eq!(thumbnails["VideoDescription"]["CodecSettings"]["Codec"], "FRAME_CAPTURE");
}

#[test]
fn template_mode_omits_file_inputs_role_and_user_metadata() {
    let source = job_source();
    let config = ConvertConfigBuilder::new()
        .template_name("ETS converted")
        .category("vod")
        .role_arn("arn:ignored")
        .camel_case_output(true)
        .build();
    let (document, _) = translate_job(&source, &config);
    let value = render_job(&document, &source.job, &config).unwrap();

    assert_eq!(value["name"], "ETS converted");
    assert_eq!(value["category"], "vod");
    assert!(value.get("role").is_none());
    assert!(value.get("userMetadata").is_none());
    assert!(value["settings"]["inputs"][0].get("fileInput").is_none());
}

#[test]
fn auto_sample_rate_follows_the_insert_defaults_policy() {
    let source = job_source();

    let (_, diagnostics) = translate_job(&source, &ConvertConfig::default());
    let errors = diagnostics.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0].path.to_string(),
        "preset.System preset: HLS 400k.audio.sampleRate"
    );

    let config = ConvertConfigBuilder::new().insert_defaults(true).build();
    let (document, diagnostics) = translate_job(&source, &config);
    assert!(!diagnostics.has_errors());
    assert!(diagnostics.warnings().iter().any(|w| w
        .message
        .ends_with("The converter has applied a static default value of 48000.")));
    let value = serde_json::to_value(&document).unwrap();
    assert_eq!(
        value["settings"]["outputGroups"][0]["outputs"][0]["audioDescriptions"][0]["codecSettings"]["aacSettings"]["sampleRate"],
        48000
    );
}

#[test]
fn diagnostics_follow_document_order() {
    let source = job_source();
    let (_, diagnostics) = translate_job(&source, &ConvertConfig::default());

    let summary: Vec<(Level, String)> = diagnostics
        .messages()
        .iter()
        .map(|d| (d.level, d.path.to_string()))
        .collect();

    let position = |level: Level, path: &str| {
        summary
            .iter()
            .position(|(l, p)| *l == level && p == path)
            .unwrap_or_else(|| panic!("missing {level} at {path}: {summary:?}"))
    };

    let fraction = position(Level::Warn, "job.inputs[0].timeSpan.startTime");
    let merge = position(Level::Warn, "job.inputs[0].inputCaptions.mergePolicy");
    let segment = position(Level::Info, "job.playlists[0]");
    let embedded = position(Level::Info, "job.outputs[1]");
    let pattern = position(Level::Info, "job.outputs[1].thumbnailPattern");
    let png = position(Level::Warn, "preset.System preset: Generic 720p.thumbnails.format");

    assert!(merge < fraction);
    assert!(fraction < segment);
    assert!(segment < embedded);
    assert!(embedded < pattern);
    assert!(pattern < png);
}

#[test]
fn repeated_runs_log_identical_diagnostics() {
    let source = job_source();
    let config = ConvertConfig::default();

    let (first_document, first) = translate_job(&source, &config);
    let (second_document, second) = translate_job(&source, &config);

    assert!(!first.is_empty());
    assert_eq!(first.messages(), second.messages());
    assert_eq!(first_document, second_document);
}

#[test]
fn missing_presets_are_rejected_before_translation() {
    let job = load_job(&fixture("job.json")).unwrap();
    let pipeline = load_pipeline(&fixture("pipeline.json")).unwrap();
    let presets: PresetTable = [load_preset(&fixture("preset_mp4.json")).unwrap()]
        .into_iter()
        .collect();

    match JobSource::new(job, pipeline, presets) {
        Err(CoreError::UnresolvedPreset { output_key, preset_id }) => {
            assert_eq!(output_key, "hls/400k");
            assert_eq!(preset_id, "1351620000001-200050");
        }
        other => panic!("expected UnresolvedPreset, got {other:?}"),
    }
}
