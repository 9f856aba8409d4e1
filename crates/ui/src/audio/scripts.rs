pub(super) fn audio_play_script(key: u64, source: &str) -> String {
    format!(
        r#"(function() {{
                    const previous = window.__quizAudio;
                    if (previous) {{
                        previous.element.pause();
                        previous.element.removeAttribute("src");
                        previous.element.load();
                    }}
                    const element = new Audio({source:?});
                    element.loop = true;
                    window.__quizAudio = {{ key: {key}, element: element }};
                    const started = element.play();
                    if (started && started.catch) {{
                        started.catch(function(err) {{
                            console.warn("background audio blocked", err);
                        }});
                    }}
                }})();"#,
        key = key,
        source = source,
    )
}

pub(super) fn audio_stop_script(key: u64) -> String {
    format!(
        r#"(function() {{
                    const current = window.__quizAudio;
                    if (!current || current.key !== {key}) {{
                        return;
                    }}
                    current.element.pause();
                    current.element.removeAttribute("src");
                    current.element.load();
                    window.__quizAudio = null;
                }})();"#,
        key = key,
    )
}
