use crate::entities::{BP2Instance, Container, Item, N_DIMENSIONS};
use crate::io::InstanceError;
use crate::io::ext_repr::{ExtInstance, ExtInstanceSet, ExtItem, ExtShape};
use itertools::Itertools;
use rayon::prelude::*;

use anyhow::{Result, ensure};

/// Imports an instance into the library.
/// All structural problems are reported as an [`InstanceError`] before anything is modelled.
pub fn import(ext_instance: &ExtInstance) -> Result<BP2Instance> {
    let (width, height) = import_dimensions(&ext_instance.box_shape, "box shape")?;
    let container = Container::new(width, height);

    let items = {
        let mut items = ext_instance
            .items
            .par_iter()
            .enumerate()
            .map(|(idx, ext_item)| import_item(idx, ext_item, &container))
            .collect::<Result<Vec<Item>>>()?;

        items.sort_by_key(|item| item.id);
        ensure!(
            items.iter().enumerate().all(|(i, item)| item.id == i),
            "All items should have consecutive IDs starting from 0. IDs: {:?}",
            items.iter().map(|item| item.id).sorted().collect_vec()
        );
        items
    };

    Ok(BP2Instance::new(container, items))
}

/// Returns the instance at `index` in the set
pub fn select_instance(set: &ExtInstanceSet, index: usize) -> Result<&ExtInstance> {
    set.instances.get(index).ok_or_else(|| {
        InstanceError::SelectorOutOfRange {
            index,
            n_instances: set.instances.len(),
        }
        .into()
    })
}

fn import_item(idx: usize, ext_item: &ExtItem, container: &Container) -> Result<Item> {
    let id = ext_item.id.map_or(idx, |id| id as usize);
    let shape = match ext_item.shapes.as_slice() {
        [shape] => shape,
        shapes => {
            return Err(InstanceError::MalformedItem {
                item: id,
                n_shapes: shapes.len(),
            }
            .into());
        }
    };
    let (width, height) = import_dimensions(shape, &format!("shape of item {id}"))?;
    if width > container.width || height > container.height {
        return Err(InstanceError::ItemExceedsContainer { item: id }.into());
    }
    Ok(Item::new(id, width, height))
}

fn import_dimensions(shape: &ExtShape, context: &str) -> Result<(u64, u64)> {
    match shape.dimensions.as_slice() {
        &[width, height] => {
            if width == 0 || height == 0 {
                return Err(InstanceError::NonPositiveDimension {
                    context: context.to_string(),
                }
                .into());
            }
            Ok((width, height))
        }
        dims => {
            debug_assert!(dims.len() != N_DIMENSIONS);
            Err(InstanceError::UnsupportedDimensions {
                context: context.to_string(),
                n_dims: dims.len(),
            }
            .into())
        }
    }
}
