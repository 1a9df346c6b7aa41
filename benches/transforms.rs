//! Benchmarks for document model transforms
//!
//! Run with: cargo bench --bench transforms

use richedit::model::{editing, transforms, BlockType, ContentState, EditorState, InlineStyle};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn state_with_paragraphs(count: usize) -> EditorState {
    let text = vec!["The quick brown fox jumps over the lazy dog."; count].join("\n");
    EditorState::create_with_content(ContentState::from_text(&text))
}

#[divan::bench(args = [10, 1000])]
fn toggle_block_type(bencher: divan::Bencher, paragraphs: usize) {
    let state = state_with_paragraphs(paragraphs);
    bencher.bench(|| transforms::toggle_block_type(&state, divan::black_box(&BlockType::BLOCKQUOTE)));
}

#[divan::bench(args = [10, 1000])]
fn toggle_inline_style_select_all(bencher: divan::Bencher, paragraphs: usize) {
    let state = editing::select_all(&state_with_paragraphs(paragraphs));
    bencher.bench(|| transforms::toggle_inline_style(&state, divan::black_box(&InlineStyle::BOLD)));
}

#[divan::bench(args = [10, 1000])]
fn insert_text(bencher: divan::Bencher, paragraphs: usize) {
    let state = state_with_paragraphs(paragraphs);
    bencher.bench(|| editing::insert_text(&state, divan::black_box("hello")));
}

#[divan::bench(args = [10, 1000])]
fn split_block(bencher: divan::Bencher, paragraphs: usize) {
    let state = state_with_paragraphs(paragraphs);
    bencher.bench(|| editing::split_block(divan::black_box(&state)));
}

#[divan::bench(args = [10, 1000])]
fn delete_selection(bencher: divan::Bencher, paragraphs: usize) {
    let state = editing::select_all(&state_with_paragraphs(paragraphs));
    bencher.bench(|| editing::delete_backward(divan::black_box(&state), editing::DeleteUnit::Character));
}

#[divan::bench]
fn undo_after_edit(bencher: divan::Bencher) {
    let state = editing::insert_text(&state_with_paragraphs(100), "edit");
    bencher.bench(|| divan::black_box(&state).undo());
}
