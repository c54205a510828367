use crate::common::*;

#[doc = "로그 출력 포멧 지정해주는 함수"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        &record.args()
    )
}

#[doc = r#"
    전역 로거를 설정해주는 함수.

    1. `logs` 디렉토리 하위에 로그 파일을 생성한다
    2. 하루 단위로 로그 파일을 로테이션하고, 최근 30개 파일만 유지
    3. 모든 로그를 표준 출력으로도 복제해준다

    # Panics
    로거 초기화에 실패한 경우 애플리케이션 종료
"#]
pub fn set_global_logger() {
    Logger::try_with_str("info")
        .unwrap_or_else(|e| panic!("[Logger Error] Invalid log specification: {:?}", e))
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(30),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .start()
        .unwrap_or_else(|e| panic!("[Logger Error] Failed to initialize global logger: {:?}", e));
}
