/// Splits `text` into chunks of at most `max_len` characters.
///
/// Line boundaries are preferred; a line longer than `max_len` is cut into
/// fixed-size slices. Text already within the limit comes back as one chunk.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    if max_len == 0 || text.chars().count() <= max_len {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut started = false;

    for line in text.split('\n') {
        let line_len = line.chars().count();
        let needed = if started { current_len + 1 + line_len } else { line_len };

        if needed <= max_len {
            if started {
                current.push('\n');
                current_len += 1;
            }
            current.push_str(line);
            current_len += line_len;
            started = true;
            continue;
        }

        if started {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
            started = false;
        }

        if line_len > max_len {
            chunks.extend(hard_split(line, max_len));
        } else {
            current.push_str(line);
            current_len = line_len;
            started = true;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

fn hard_split(line: &str, max_len: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    chars.chunks(max_len).map(|chunk| chunk.iter().collect()).collect()
}
